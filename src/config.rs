use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Medsafe";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "medsafe=info"
}

/// Public openFDA drug-label search endpoint.
pub const OPENFDA_LABEL_URL: &str = "https://api.fda.gov/drug/label.json";

/// Per-request timeout for external label lookups. No retry on expiry;
/// the caller falls through to its next strategy or local fallback.
pub const LOOKUP_TIMEOUT_SECS: u64 = 8;

/// Result cap for the broad interaction-text scan (last lookup strategy).
pub const BROAD_SCAN_LIMIT: usize = 5;

/// Get the application data directory
/// ~/Medsafe/ on all platforms (user-visible, plain files)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Medsafe")
}

/// Default location of the single patient record.
pub fn patient_record_path() -> PathBuf {
    app_data_dir().join("patient.json")
}
