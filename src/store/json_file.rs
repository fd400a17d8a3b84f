use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Patient;

use super::{PatientStore, StoreError};

/// Patient record persisted as one JSON document on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the user's data directory.
    pub fn default_location() -> Self {
        Self::new(crate::config::patient_record_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

impl PatientStore for JsonFileStore {
    fn load(&self) -> Result<Option<Patient>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let patient =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Some(patient))
    }

    fn save(&self, patient: &Patient) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(patient)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), "Patient record saved");
        Ok(())
    }
}
