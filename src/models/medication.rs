use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::MedicationStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dose: Option<String>,
    pub frequency: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub status: MedicationStatus,
    pub notes: Option<String>,
}

impl Medication {
    /// Patient-entered medication with only a name; everything else optional.
    pub fn named(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            dose: None,
            frequency: None,
            start_date: None,
            status: MedicationStatus::Active,
            notes: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == MedicationStatus::Active
    }
}
