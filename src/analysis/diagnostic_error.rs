use std::collections::HashSet;

use crate::models::{Diagnosis, Symptom};

use super::types::{DiagnosticErrorRisk, RiskLevel};

/// Estimate the risk that something the patient reports is going
/// unexplained: severe symptoms with no diagnosis on record at all, and
/// severe symptoms no recorded diagnosis appears to address.
pub fn assess_diagnostic_error(
    symptoms: &[Symptom],
    diagnoses: &[Diagnosis],
) -> DiagnosticErrorRisk {
    let severe: Vec<&Symptom> = symptoms.iter().filter(|s| s.is_severe()).collect();

    let mut risk_level = RiskLevel::Low;
    let mut potential_concerns = Vec::new();
    let mut recommendations = Vec::new();

    if !severe.is_empty() && diagnoses.is_empty() {
        risk_level = RiskLevel::High;
        potential_concerns.push(format!(
            "{} severe symptom(s) recorded with no documented diagnosis.",
            severe.len()
        ));
        recommendations
            .push("Bring these symptoms to a doctor for evaluation.".to_string());
    }

    let diagnosis_texts: Vec<String> = diagnoses
        .iter()
        .map(|d| d.search_text().to_lowercase())
        .collect();

    for symptom in &severe {
        let needle = symptom.name.to_lowercase();
        let addressed = diagnosis_texts.iter().any(|t| t.contains(&needle));
        if !addressed && !diagnoses.is_empty() {
            risk_level = risk_level.max(RiskLevel::Medium);
            potential_concerns.push(format!(
                "\"{}\" is severe but may not be addressed by any recorded diagnosis.",
                symptom.name
            ));
            recommendations.push(format!(
                "Ask whether your current diagnoses explain {}.",
                symptom.name
            ));
        }
    }

    if recommendations.is_empty() {
        recommendations.push(
            "Keep your symptom and diagnosis records up to date so changes are easy to spot."
                .to_string(),
        );
    }

    DiagnosticErrorRisk {
        risk_level,
        potential_concerns: dedup_preserving_order(potential_concerns),
        recommendations: dedup_preserving_order(recommendations),
    }
}

/// Set-semantics dedup that keeps first-seen order.
fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
