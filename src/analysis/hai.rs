use crate::models::{Diagnosis, MedicalHistory, Symptom};

use super::reference::{HaiPattern, ReferenceData};
use super::types::{HaiRisk, RiskLevel};

/// Screen for healthcare-associated infections by keyword co-occurrence:
/// a pattern fires only when the patient's symptom names hit its symptom
/// keyword set AND the diagnosis names hit its diagnosis keyword set.
/// The result is never empty — with nothing matched the patient still
/// gets one generic prevention record.
pub fn assess_hai_risks(
    symptoms: &[Symptom],
    diagnoses: &[Diagnosis],
    history: &MedicalHistory,
    reference: &ReferenceData,
) -> Vec<HaiRisk> {
    let mut risks = Vec::new();

    for pattern in &reference.hai_patterns {
        let matched_symptoms = matching_names(
            symptoms.iter().map(|s| s.name.as_str()),
            &pattern.symptom_keywords,
        );
        let matched_diagnoses = matching_names(
            diagnoses.iter().map(|d| d.name.as_str()),
            &pattern.diagnosis_keywords,
        );

        if !matched_symptoms.is_empty() && !matched_diagnoses.is_empty() {
            risks.push(HaiRisk {
                infection_type: pattern.code.clone(),
                description: pattern.description.clone(),
                risk_level: pattern_risk(history),
                matched_symptoms,
                matched_diagnoses,
                prevention_tips: pattern.prevention_tips.clone(),
            });
        }
    }

    if risks.is_empty() {
        risks.push(generic_guidance(history));
    }

    risks
}

fn matching_names<'a>(
    names: impl Iterator<Item = &'a str>,
    keywords: &[String],
) -> Vec<String> {
    let mut matched = Vec::new();
    for name in names {
        let lower = name.to_lowercase();
        if keywords.iter().any(|k| lower.contains(k.as_str())) && !matched.contains(&name.to_string())
        {
            matched.push(name.to_string());
        }
    }
    matched
}

fn pattern_risk(history: &MedicalHistory) -> RiskLevel {
    if history.recent_hospitalization {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

fn generic_guidance(history: &MedicalHistory) -> HaiRisk {
    let (risk_level, description) = if history.recent_hospitalization {
        (
            RiskLevel::Medium,
            "Recent hospitalization raises the baseline risk of \
             healthcare-associated infection"
                .to_string(),
        )
    } else {
        (
            RiskLevel::Low,
            "General infection-prevention guidance".to_string(),
        )
    };

    HaiRisk {
        infection_type: "general".to_string(),
        description,
        risk_level,
        matched_symptoms: Vec::new(),
        matched_diagnoses: Vec::new(),
        prevention_tips: vec![
            "Wash hands before and after any wound or device care.".to_string(),
            "Watch for fever, redness, or new pain after any procedure.".to_string(),
            "Tell your care team promptly if something does not look right.".to_string(),
        ],
    }
}

/// Expose pattern matching for one symptom/diagnosis pairing; used by
/// tests and by callers that screen a single new entry.
pub fn pattern_matches(pattern: &HaiPattern, symptom: &str, diagnosis: &str) -> bool {
    let symptom_lower = symptom.to_lowercase();
    let diagnosis_lower = diagnosis.to_lowercase();
    pattern
        .symptom_keywords
        .iter()
        .any(|k| symptom_lower.contains(k.as_str()))
        && pattern
            .diagnosis_keywords
            .iter()
            .any(|k| diagnosis_lower.contains(k.as_str()))
}
