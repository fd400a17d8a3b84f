use std::sync::Mutex;

use crate::models::Patient;

use super::{PatientStore, StoreError};

/// In-memory store for tests and previews. Same whole-record semantics as
/// the file-backed store.
#[derive(Default)]
pub struct MemoryStore {
    record: Mutex<Option<Patient>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patient(patient: Patient) -> Self {
        Self {
            record: Mutex::new(Some(patient)),
        }
    }
}

impl PatientStore for MemoryStore {
    fn load(&self) -> Result<Option<Patient>, StoreError> {
        let guard = self.record.lock().unwrap_or_else(|p| p.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, patient: &Patient) -> Result<(), StoreError> {
        let mut guard = self.record.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(patient.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_none() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_replaces_previous_record() {
        let store = MemoryStore::new();
        let first = Patient::new("Ada");
        let second = Patient::new("Grace");

        store.save(&first).unwrap();
        store.save(&second).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.name, "Grace");
    }
}
