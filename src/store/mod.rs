pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::models::Patient;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error at {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Patient record is not valid JSON: {0}")]
    Corrupt(String),

    #[error("Serialization failed: {0}")]
    Serialize(String),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Persistence seam for the single patient record.
///
/// Every mutation is a full read-modify-write of the whole record
/// (last-writer-wins; the app is single-user, single-device). The analysis
/// pipeline only ever reads through this interface — writes belong to the
/// UI layer that owns the record.
pub trait PatientStore {
    /// Load the patient record, or `None` if none has been saved yet.
    fn load(&self) -> Result<Option<Patient>, StoreError>;

    /// Replace the stored patient record.
    fn save(&self, patient: &Patient) -> Result<(), StoreError>;
}
