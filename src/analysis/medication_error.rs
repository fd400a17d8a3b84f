use crate::models::Medication;

use super::reference::ReferenceData;
use super::types::{MedicationErrorRisk, RiskLevel};

/// Flag medications prone to administration mistakes: high-alert classes
/// and look-alike/sound-alike names. Every queried medication gets a
/// record; unmatched ones carry generic guidance rather than nothing.
pub fn assess_medication_errors(
    medications: &[Medication],
    reference: &ReferenceData,
) -> Vec<MedicationErrorRisk> {
    medications
        .iter()
        .filter(|m| !m.name.trim().is_empty())
        .map(|m| assess_one(&m.name, reference))
        .collect()
}

fn assess_one(name: &str, reference: &ReferenceData) -> MedicationErrorRisk {
    let mut risk_level = RiskLevel::Low;
    let mut high_alert_status = false;
    let mut confused_with = Vec::new();
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    if let Some(klass) = reference.high_alert_match(name) {
        high_alert_status = true;
        risk_level = RiskLevel::High;
        warnings.push(format!(
            "{name} belongs to the high-alert class \"{klass}\"."
        ));
        recommendations.push("Double-check the dose before every administration.".to_string());
        recommendations
            .push("Confirm any dose change with your pharmacist before acting on it.".to_string());
    }

    if let Some(entry) = reference.lasa_match(name) {
        risk_level = risk_level.max(RiskLevel::Medium);
        confused_with = entry.confused_with.clone();
        warnings.push(format!(
            "{name} is easily confused with {}.",
            entry.confused_with.join(", ")
        ));
        recommendations
            .push("Check the name on the label each time you refill.".to_string());
    }

    if recommendations.is_empty() {
        recommendations
            .push("Check the label and dose when you collect each refill.".to_string());
        recommendations
            .push("Keep an up-to-date list of everything you take.".to_string());
    }

    MedicationErrorRisk {
        medication_name: name.to_string(),
        high_alert_status,
        risk_level,
        confused_with,
        warnings,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceData {
        ReferenceData::builtin()
    }

    #[test]
    fn insulin_is_high_alert_and_high_risk() {
        let meds = vec![Medication::named("Insulin Glargine")];
        let risks = assess_medication_errors(&meds, &reference());

        assert_eq!(risks.len(), 1);
        assert!(risks[0].high_alert_status);
        assert_eq!(risks[0].risk_level, RiskLevel::High);
        assert!(!risks[0].warnings.is_empty());
    }

    #[test]
    fn lasa_name_gets_confusion_warning() {
        let meds = vec![Medication::named("Hydroxyzine")];
        let risks = assess_medication_errors(&meds, &reference());

        assert!(!risks[0].high_alert_status);
        assert_eq!(risks[0].risk_level, RiskLevel::Medium);
        assert_eq!(risks[0].confused_with, vec!["hydralazine"]);
    }

    #[test]
    fn unmatched_medication_gets_generic_guidance() {
        let meds = vec![Medication::named("Loratadine")];
        let risks = assess_medication_errors(&meds, &reference());

        assert!(!risks[0].high_alert_status);
        assert_eq!(risks[0].risk_level, RiskLevel::Low);
        assert!(risks[0].warnings.is_empty());
        assert!(!risks[0].recommendations.is_empty());
    }

    #[test]
    fn high_alert_and_lasa_both_apply() {
        let mut reference = reference();
        reference.lasa_pairs.push(super::super::reference::LasaEntry {
            name: "warfarin".into(),
            confused_with: vec!["xarelto".into()],
        });

        let meds = vec![Medication::named("Warfarin")];
        let risks = assess_medication_errors(&meds, &reference);
        assert!(risks[0].high_alert_status);
        assert_eq!(risks[0].risk_level, RiskLevel::High);
        assert_eq!(risks[0].confused_with, vec!["xarelto"]);
        assert_eq!(risks[0].warnings.len(), 2);
    }

    #[test]
    fn blank_names_are_skipped() {
        let meds = vec![Medication::named("   "), Medication::named("Aspirin")];
        let risks = assess_medication_errors(&meds, &reference());
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].medication_name, "Aspirin");
    }

    #[test]
    fn every_medication_yields_a_record() {
        let meds = vec![
            Medication::named("Insulin Aspart"),
            Medication::named("Metformin"),
            Medication::named("Vitamin D"),
        ];
        let risks = assess_medication_errors(&meds, &reference());
        assert_eq!(risks.len(), 3);
        for risk in &risks {
            assert!(!risk.recommendations.is_empty());
        }
    }
}
