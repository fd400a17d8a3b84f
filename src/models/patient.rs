use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::history::MedicalHistory;
use super::{Diagnosis, Medication, Symptom};

/// The single persisted patient record. The store reads and writes it as
/// one whole JSON document; the analysis pipeline consumes it read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub medications: Vec<Medication>,
    pub symptoms: Vec<Symptom>,
    pub diagnoses: Vec<Diagnosis>,
    pub history: MedicalHistory,
}

impl Patient {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date_of_birth: None,
            medications: Vec::new(),
            symptoms: Vec::new(),
            diagnoses: Vec::new(),
            history: MedicalHistory::default(),
        }
    }

    /// Names of medications the patient is currently taking.
    pub fn active_medication_names(&self) -> Vec<String> {
        self.medications
            .iter()
            .filter(|m| m.is_active())
            .map(|m| m.name.clone())
            .collect()
    }

    /// Symptoms the patient reports as ongoing.
    pub fn active_symptoms(&self) -> Vec<&Symptom> {
        self.symptoms.iter().filter(|s| s.still_active).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::MedicationStatus;

    #[test]
    fn active_medication_names_skips_stopped() {
        let mut patient = Patient::new("Test Patient");
        patient.medications.push(Medication::named("Warfarin"));
        let mut stopped = Medication::named("Ibuprofen");
        stopped.status = MedicationStatus::Stopped;
        patient.medications.push(stopped);

        assert_eq!(patient.active_medication_names(), vec!["Warfarin"]);
    }

    #[test]
    fn active_symptoms_skips_resolved() {
        let mut patient = Patient::new("Test Patient");
        patient.symptoms.push(Symptom::new("headache", 5));
        let mut resolved = Symptom::new("cough", 3);
        resolved.still_active = false;
        patient.symptoms.push(resolved);

        let active = patient.active_symptoms();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "headache");
    }
}
