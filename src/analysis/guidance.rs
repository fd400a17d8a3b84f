use crate::models::{Diagnosis, Symptom};

use super::types::{DiagnosisSafetyRecord, RiskLevel, SymptomSafetyRecord};

/// Symptom names that force a high risk tier regardless of the patient's
/// own severity rating.
static RED_FLAG_SYMPTOMS: &[&str] = &[
    "chest pain",
    "shortness of breath",
    "difficulty breathing",
    "severe bleeding",
    "coughing blood",
    "confusion",
    "fainting",
    "loss of consciousness",
    "numbness",
    "slurred speech",
    "vision loss",
    "swelling of the face",
    "suicidal",
];

/// Long-running conditions that benefit from routine monitoring.
static CHRONIC_CONDITIONS: &[&str] = &[
    "diabetes",
    "hypertension",
    "asthma",
    "copd",
    "heart failure",
    "kidney disease",
    "arthritis",
    "depression",
    "hypothyroid",
    "atrial fibrillation",
];

/// Conditions treated as high risk whenever they appear in the record.
static SERIOUS_CONDITIONS: &[&str] = &[
    "cancer",
    "stroke",
    "heart attack",
    "myocardial",
    "sepsis",
    "embolism",
    "aneurysm",
];

/// Build the safety record for one symptom from its name and the
/// patient's 1-10 severity rating. Pure heuristics over local tables —
/// this is also the fallback path when external guidance is unavailable.
pub fn symptom_safety(symptom: &Symptom) -> SymptomSafetyRecord {
    let lower = symptom.name.to_lowercase();
    let red_flag = RED_FLAG_SYMPTOMS.iter().find(|k| lower.contains(*k));

    let mut risk_level = if symptom.severity >= 7 {
        RiskLevel::High
    } else if symptom.severity >= 4 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };
    if red_flag.is_some() {
        risk_level = RiskLevel::High;
    }

    let mut concerns = Vec::new();
    let mut warning_flags = Vec::new();

    if let Some(flag) = red_flag {
        concerns.push(format!(
            "{} can signal a condition that needs prompt medical attention.",
            symptom.name
        ));
        warning_flags.push(format!("Red-flag symptom: {flag}"));
    }
    if symptom.is_severe() {
        concerns.push(format!(
            "You rated {} at {} of 10.",
            symptom.name, symptom.severity
        ));
        warning_flags.push(format!("Severity {} of 10", symptom.severity));
    }
    if concerns.is_empty() {
        concerns.push(format!(
            "No specific concern patterns matched for {}.",
            symptom.name
        ));
    }

    let recommendations = match risk_level {
        RiskLevel::High => vec![
            "Discuss this symptom with a healthcare professional promptly.".to_string(),
            "Keep a note of when it occurs and what makes it better or worse.".to_string(),
        ],
        RiskLevel::Medium => vec![
            "Mention this symptom at your next appointment.".to_string(),
            "Record changes in severity in your journal.".to_string(),
        ],
        RiskLevel::Low => vec![
            "Keep tracking this symptom.".to_string(),
            "Mention it to your doctor if it persists or worsens.".to_string(),
        ],
    };

    SymptomSafetyRecord {
        symptom_name: symptom.name.clone(),
        risk_level,
        concerns,
        recommendations,
        warning_flags,
    }
}

/// Build the safety record for one diagnosis from condition-class tables.
pub fn diagnosis_safety(diagnosis: &Diagnosis) -> DiagnosisSafetyRecord {
    let lower = diagnosis.name.to_lowercase();
    let serious = SERIOUS_CONDITIONS.iter().find(|k| lower.contains(*k));
    let chronic = CHRONIC_CONDITIONS.iter().find(|k| lower.contains(*k));

    let risk_level = if serious.is_some() {
        RiskLevel::High
    } else if chronic.is_some() {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let mut concerns = Vec::new();
    let mut warning_flags = Vec::new();

    if serious.is_some() {
        concerns.push(format!(
            "{} is a serious condition that needs close follow-up.",
            diagnosis.name
        ));
        warning_flags.push(format!("Serious condition: {}", diagnosis.name));
    } else if chronic.is_some() {
        concerns.push(format!(
            "{} is a long-term condition that benefits from regular monitoring.",
            diagnosis.name
        ));
    } else {
        concerns.push(format!(
            "No specific concern patterns matched for {}.",
            diagnosis.name
        ));
    }

    let recommendations = match risk_level {
        RiskLevel::High => vec![
            "Keep every scheduled follow-up appointment for this condition.".to_string(),
            "Know which warning signs your care team asked you to watch for.".to_string(),
        ],
        RiskLevel::Medium => vec![
            "Stay on schedule with routine checks for this condition.".to_string(),
            "Track symptoms that might relate to it in your journal.".to_string(),
        ],
        RiskLevel::Low => vec![
            "Keep this diagnosis in your record so future care can see it.".to_string(),
        ],
    };

    DiagnosisSafetyRecord {
        diagnosis_name: diagnosis.name.clone(),
        risk_level,
        concerns,
        recommendations,
        warning_flags,
    }
}
