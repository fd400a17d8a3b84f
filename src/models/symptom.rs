use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A patient-reported symptom. Severity is the patient's own 1-10 rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptom {
    pub id: Uuid,
    pub name: String,
    pub severity: i32,
    pub onset_date: Option<NaiveDate>,
    pub still_active: bool,
    pub notes: Option<String>,
}

impl Symptom {
    pub fn new(name: &str, severity: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            severity: severity.clamp(1, 10),
            onset_date: None,
            still_active: true,
            notes: None,
        }
    }

    /// Severity 7 or above on the patient's 1-10 scale.
    pub fn is_severe(&self) -> bool {
        self.severity >= 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_clamped_to_scale() {
        assert_eq!(Symptom::new("headache", 15).severity, 10);
        assert_eq!(Symptom::new("headache", -3).severity, 1);
        assert_eq!(Symptom::new("headache", 6).severity, 6);
    }

    #[test]
    fn severe_threshold_is_seven() {
        assert!(!Symptom::new("nausea", 6).is_severe());
        assert!(Symptom::new("nausea", 7).is_severe());
    }
}
