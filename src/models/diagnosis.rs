use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::DiagnosisStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    pub id: Uuid,
    pub name: String,
    pub date_diagnosed: Option<NaiveDate>,
    pub status: DiagnosisStatus,
    pub notes: Option<String>,
}

impl Diagnosis {
    pub fn named(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date_diagnosed: None,
            status: DiagnosisStatus::Active,
            notes: None,
        }
    }

    /// Full searchable text for this diagnosis: name plus any notes.
    pub fn search_text(&self) -> String {
        match &self.notes {
            Some(notes) => format!("{} {}", self.name, notes),
            None => self.name.clone(),
        }
    }
}
