use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use crate::models::{Medication, Patient};
use crate::sources::LabelSource;

use super::diagnostic_error::assess_diagnostic_error;
use super::effects::{self, cross_check_effects};
use super::guidance::{diagnosis_safety, symptom_safety};
use super::hai::assess_hai_risks;
use super::interactions::check_interactions;
use super::medication_error::assess_medication_errors;
use super::reference::ReferenceData;
use super::types::{
    AnalysisStatus, DiagnosticErrorRisk, InteractionCheck, MedicationEffects, RiskLevel,
    SafetyAnalysisReport,
};

/// Orchestrates the full safety analysis over one patient record.
///
/// The contract: `analyze` always returns a structurally complete report.
/// A sub-analysis that cannot reach its source degrades to local
/// heuristics and the report goes `Partial`; an unexpected internal
/// failure rebuilds the whole report from local generators and marks it
/// `Error`. Nothing propagates to the caller.
pub struct SafetyAnalyzer<S: LabelSource> {
    source: S,
    reference: ReferenceData,
}

impl<S: LabelSource> SafetyAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            reference: ReferenceData::builtin(),
        }
    }

    pub fn with_reference(source: S, reference: ReferenceData) -> Self {
        Self { source, reference }
    }

    /// Run the six sub-analyses and merge them into one report.
    pub fn analyze(&self, patient: &Patient) -> SafetyAnalysisReport {
        let start = Instant::now();

        let mut report = match catch_unwind(AssertUnwindSafe(|| self.run(patient))) {
            Ok(report) => report,
            Err(panic) => {
                let message = panic_message(panic);
                tracing::error!(error = %message, "Analysis failed; rebuilding from local generators");
                self.local_report(patient, message)
            }
        };

        report.elapsed_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            status = report.status.as_str(),
            symptoms = report.symptom_safety_data.len(),
            diagnoses = report.diagnosis_safety_data.len(),
            medication_risks = report.medication_error_risks.len(),
            hai_risks = report.hai_risks.len(),
            elapsed_ms = report.elapsed_ms,
            "Safety analysis complete"
        );

        report
    }

    /// Check every pair of the patient's active medications for label
    /// interactions. Separate from `analyze`; the medication screens
    /// render it on their own.
    pub fn check_interactions(&self, patient: &Patient) -> InteractionCheck {
        check_interactions(&self.source, &patient.active_medication_names())
    }

    fn run(&self, patient: &Patient) -> SafetyAnalysisReport {
        let active_medications = active_medications(patient);

        let symptom_safety_data = patient.symptoms.iter().map(symptom_safety).collect();
        let diagnosis_safety_data = patient.diagnoses.iter().map(diagnosis_safety).collect();
        let diagnostic_error_risk =
            assess_diagnostic_error(&patient.symptoms, &patient.diagnoses);
        let medication_error_risks =
            assess_medication_errors(&active_medications, &self.reference);
        let hai_risks = assess_hai_risks(
            &patient.symptoms,
            &patient.diagnoses,
            &patient.history,
            &self.reference,
        );
        let effects_outcome = cross_check_effects(
            &self.source,
            &patient.medications,
            &patient.symptoms,
            &patient.diagnoses,
        );

        let status = if effects_outcome.fell_back {
            AnalysisStatus::Partial
        } else {
            AnalysisStatus::Success
        };

        SafetyAnalysisReport {
            symptom_safety_data,
            diagnosis_safety_data,
            diagnostic_error_risk,
            medication_effects: effects_outcome.effects,
            medication_error_risks,
            hai_risks,
            status,
            error: None,
            elapsed_ms: 0,
        }
    }

    /// Best-effort report built without touching the source. A second
    /// failure here yields the minimal structurally-complete report.
    fn local_report(&self, patient: &Patient, error: String) -> SafetyAnalysisReport {
        let rebuilt = catch_unwind(AssertUnwindSafe(|| {
            let active_medications = active_medications(patient);
            SafetyAnalysisReport {
                symptom_safety_data: patient.symptoms.iter().map(symptom_safety).collect(),
                diagnosis_safety_data: patient.diagnoses.iter().map(diagnosis_safety).collect(),
                diagnostic_error_risk: assess_diagnostic_error(
                    &patient.symptoms,
                    &patient.diagnoses,
                ),
                medication_effects: effects::local_only(
                    &patient.medications,
                    &patient.symptoms,
                    &patient.diagnoses,
                ),
                medication_error_risks: assess_medication_errors(
                    &active_medications,
                    &self.reference,
                ),
                hai_risks: assess_hai_risks(
                    &patient.symptoms,
                    &patient.diagnoses,
                    &patient.history,
                    &self.reference,
                ),
                status: AnalysisStatus::Error,
                error: None,
                elapsed_ms: 0,
            }
        }));

        let mut report = rebuilt.unwrap_or_else(|_| empty_report());
        report.status = AnalysisStatus::Error;
        report.error = Some(error);
        report
    }
}

fn active_medications(patient: &Patient) -> Vec<Medication> {
    patient
        .medications
        .iter()
        .filter(|m| m.is_active())
        .cloned()
        .collect()
}

/// Minimal report with every field present and nothing in it.
fn empty_report() -> SafetyAnalysisReport {
    SafetyAnalysisReport {
        symptom_safety_data: Vec::new(),
        diagnosis_safety_data: Vec::new(),
        diagnostic_error_risk: DiagnosticErrorRisk {
            risk_level: RiskLevel::Low,
            potential_concerns: Vec::new(),
            recommendations: vec![
                "The analysis could not be completed. Try again later.".to_string()
            ],
        },
        medication_effects: MedicationEffects::default(),
        medication_error_risks: Vec::new(),
        hai_risks: Vec::new(),
        status: AnalysisStatus::Error,
        error: None,
        elapsed_ms: 0,
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected internal error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Medication, Symptom};
    use crate::sources::{InteractionText, SourceError};

    use super::*;

    /// Source where every call fails — a simulated network outage.
    struct OutageSource;

    impl LabelSource for OutageSource {
        fn find_interaction(
            &self,
            _drug_a: &str,
            _drug_b: &str,
        ) -> Result<Option<InteractionText>, SourceError> {
            Err(SourceError::Connect("https://api.fda.gov".into()))
        }

        fn adverse_reactions(&self, _drug: &str) -> Result<Option<String>, SourceError> {
            Err(SourceError::Connect("https://api.fda.gov".into()))
        }
    }

    /// Source that is reachable but has no data.
    struct EmptySource;

    impl LabelSource for EmptySource {
        fn find_interaction(
            &self,
            _drug_a: &str,
            _drug_b: &str,
        ) -> Result<Option<InteractionText>, SourceError> {
            Ok(None)
        }

        fn adverse_reactions(&self, _drug: &str) -> Result<Option<String>, SourceError> {
            Ok(None)
        }
    }

    /// Source that panics, standing in for an unexpected internal bug.
    struct PanickingSource;

    impl LabelSource for PanickingSource {
        fn find_interaction(
            &self,
            _drug_a: &str,
            _drug_b: &str,
        ) -> Result<Option<InteractionText>, SourceError> {
            panic!("label cache poisoned");
        }

        fn adverse_reactions(&self, _drug: &str) -> Result<Option<String>, SourceError> {
            panic!("label cache poisoned");
        }
    }

    fn sample_patient() -> Patient {
        let mut patient = Patient::new("Ada");
        patient.medications.push(Medication::named("Insulin Glargine"));
        patient.medications.push(Medication::named("Lisinopril"));
        patient.symptoms.push(Symptom::new("headache", 9));
        patient
    }

    #[test]
    fn empty_patient_yields_complete_success_report() {
        let analyzer = SafetyAnalyzer::new(EmptySource);
        let report = analyzer.analyze(&Patient::new("Ada"));

        assert_eq!(report.status, AnalysisStatus::Success);
        assert!(report.error.is_none());
        assert!(report.symptom_safety_data.is_empty());
        assert!(report.diagnosis_safety_data.is_empty());
        assert!(report.medication_error_risks.is_empty());
        // The infection screen always returns at least generic guidance.
        assert_eq!(report.hai_risks.len(), 1);
        assert_eq!(report.hai_risks[0].infection_type, "general");
    }

    #[test]
    fn severe_symptom_without_diagnosis_escalates_diagnostic_risk() {
        let mut patient = Patient::new("Ada");
        patient.symptoms.push(Symptom::new("headache", 9));

        let analyzer = SafetyAnalyzer::new(EmptySource);
        let report = analyzer.analyze(&patient);

        assert_eq!(report.diagnostic_error_risk.risk_level, RiskLevel::High);
        assert!(report
            .diagnostic_error_risk
            .potential_concerns
            .iter()
            .any(|c| c.contains("no documented diagnosis")));
    }

    #[test]
    fn insulin_flags_high_alert_medication_risk() {
        let mut patient = Patient::new("Ada");
        patient.medications.push(Medication::named("Insulin Glargine"));

        let analyzer = SafetyAnalyzer::new(EmptySource);
        let report = analyzer.analyze(&patient);

        assert_eq!(report.medication_error_risks.len(), 1);
        assert!(report.medication_error_risks[0].high_alert_status);
        assert_eq!(
            report.medication_error_risks[0].risk_level,
            RiskLevel::High
        );
    }

    #[test]
    fn full_outage_degrades_to_partial_with_all_fields() {
        let analyzer = SafetyAnalyzer::new(OutageSource);
        let report = analyzer.analyze(&sample_patient());

        assert_eq!(report.status, AnalysisStatus::Partial);
        // Local generators still produced every section.
        assert_eq!(report.symptom_safety_data.len(), 1);
        assert_eq!(report.medication_error_risks.len(), 2);
        assert!(!report.hai_risks.is_empty());
        assert!(!report.diagnostic_error_risk.recommendations.is_empty());
    }

    #[test]
    fn panic_inside_a_sub_analysis_never_escapes() {
        let analyzer = SafetyAnalyzer::new(PanickingSource);
        let report = analyzer.analyze(&sample_patient());

        assert_eq!(report.status, AnalysisStatus::Error);
        assert!(report.error.as_ref().unwrap().contains("poisoned"));
        // The report was rebuilt from local generators, not emptied.
        assert_eq!(report.symptom_safety_data.len(), 1);
        assert_eq!(report.medication_error_risks.len(), 2);
        assert!(!report.hai_risks.is_empty());
    }

    #[test]
    fn interaction_check_uses_active_medications_only() {
        let mut patient = sample_patient();
        let mut stopped = Medication::named("Ibuprofen");
        stopped.status = crate::models::enums::MedicationStatus::Stopped;
        patient.medications.push(stopped);

        let analyzer = SafetyAnalyzer::new(EmptySource);
        let check = analyzer.check_interactions(&patient);
        // 2 active medications -> 1 pair, no records from an empty source.
        assert!(check.records.is_empty());
        assert!(check.all_pairs_checked);
    }

    #[test]
    fn reports_are_deterministic_for_identical_inputs() {
        let analyzer = SafetyAnalyzer::new(EmptySource);
        let patient = sample_patient();

        let mut first = analyzer.analyze(&patient);
        let mut second = analyzer.analyze(&patient);
        // Wall-clock timing is the only permitted difference.
        first.elapsed_ms = 0;
        second.elapsed_ms = 0;
        assert_eq!(first, second);
    }

    #[test]
    fn outage_report_serializes_with_every_consumer_field() {
        let analyzer = SafetyAnalyzer::new(OutageSource);
        let report = analyzer.analyze(&sample_patient());
        let json = serde_json::to_string(&report).unwrap();

        for field in [
            "symptomSafetyData",
            "diagnosisSafetyData",
            "diagnosticErrorRisk",
            "medicationEffects",
            "medicationSymptomEffects",
            "medicationDiagnosisEffects",
            "medicationErrorRisks",
            "haiRisks",
            "status",
        ] {
            assert!(json.contains(field), "missing {field}: {json}");
        }
        assert!(json.contains("\"status\":\"partial\""));
    }
}
