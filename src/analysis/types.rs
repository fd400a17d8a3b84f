use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Severity and risk tiers
// ---------------------------------------------------------------------------

/// Interaction severity assigned by keyword heuristics over label text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum InteractionSeverity {
    Minor,
    Moderate,
    Major,
}

impl InteractionSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Major => "major",
        }
    }
}

/// Risk tier for per-entity safety records. Ordered so "raise to at
/// least X" is a plain `max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Outcome quality of a full analysis run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// Every sub-analysis used its primary source.
    Success,
    /// One or more sub-analyses fell back to local heuristics.
    Partial,
    /// An unexpected internal failure; the report was rebuilt from local
    /// generators only.
    Error,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Partial => "partial",
            Self::Error => "error",
        }
    }
}

// ---------------------------------------------------------------------------
// Interaction records
// ---------------------------------------------------------------------------

/// One medication pair with label evidence of an interaction. Immutable
/// once built; lives for a single analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub drug1: String,
    pub drug2: String,
    pub severity: InteractionSeverity,
    /// Raw source text the severity and guidance were derived from.
    pub description: String,
    pub simplified_explanation: String,
    pub possible_effects: Vec<String>,
    pub recommendations: Vec<String>,
    /// Provenance, e.g. "FDA drug label (openFDA)".
    pub source: String,
}

/// Result of checking every medication pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InteractionCheck {
    pub records: Vec<InteractionRecord>,
    /// False when at least one pair could not be checked against the
    /// source. The presentation layer may show a "could not check all
    /// interactions" notice; per-pair detail is deliberately not kept.
    pub all_pairs_checked: bool,
}

// ---------------------------------------------------------------------------
// Per-entity safety records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymptomSafetyRecord {
    pub symptom_name: String,
    pub risk_level: RiskLevel,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub warning_flags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisSafetyRecord {
    pub diagnosis_name: String,
    pub risk_level: RiskLevel,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub warning_flags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticErrorRisk {
    pub risk_level: RiskLevel,
    pub potential_concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationErrorRisk {
    pub medication_name: String,
    pub high_alert_status: bool,
    pub risk_level: RiskLevel,
    /// Look-alike/sound-alike names this medication is easily mistaken for.
    pub confused_with: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HaiRisk {
    /// Short code, e.g. "CLABSI" or "general".
    pub infection_type: String,
    pub description: String,
    pub risk_level: RiskLevel,
    pub matched_symptoms: Vec<String>,
    pub matched_diagnoses: Vec<String>,
    pub prevention_tips: Vec<String>,
}

/// A possible link between a medication's label and something the patient
/// is experiencing or has been diagnosed with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEffect {
    pub medication_name: String,
    pub subject_name: String,
    /// The label sentence that mentioned the subject, when one exists.
    pub excerpt: Option<String>,
    pub note: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEffects {
    pub medication_symptom_effects: Vec<MedicationEffect>,
    pub medication_diagnosis_effects: Vec<MedicationEffect>,
}

// ---------------------------------------------------------------------------
// The report
// ---------------------------------------------------------------------------

/// The full safety analysis handed to the presentation layer. Every field
/// is structurally present regardless of `status`; degradation shows up
/// as generic content, never as a missing field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAnalysisReport {
    pub symptom_safety_data: Vec<SymptomSafetyRecord>,
    pub diagnosis_safety_data: Vec<DiagnosisSafetyRecord>,
    pub diagnostic_error_risk: DiagnosticErrorRisk,
    pub medication_effects: MedicationEffects,
    pub medication_error_risks: Vec<MedicationErrorRisk>,
    pub hai_risks: Vec<HaiRisk>,
    pub status: AnalysisStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to load reference data from {0}: {1}")]
    ReferenceDataLoad(String, String),

    #[error("Failed to parse reference data {0}: {1}")]
    ReferenceDataParse(String, String),
}
