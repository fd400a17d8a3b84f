use serde::{Deserialize, Serialize};

/// Background medical history the patient maintains alongside current
/// medications and diagnoses. Free-text lists, patient-entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub allergies: Vec<String>,
    pub past_conditions: Vec<String>,
    pub surgeries: Vec<String>,
    /// Hospital stay within roughly the last 90 days. Raises the baseline
    /// for healthcare-associated infection guidance.
    pub recent_hospitalization: bool,
}
