pub mod analyzer;
pub mod diagnostic_error;
pub mod effects;
pub mod extract;
pub mod guidance;
pub mod hai;
pub mod interactions;
pub mod medication_error;
pub mod reference;
pub mod severity;
pub mod types;

pub use analyzer::SafetyAnalyzer;
pub use interactions::check_interactions;
pub use reference::ReferenceData;
pub use severity::classify_severity;
pub use types::*;
