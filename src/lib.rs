//! Medsafe core: patient record models, a pluggable persistence seam,
//! an openFDA label client, and the safety-analysis pipeline the app's
//! screens render.
//!
//! The pipeline is best-effort by design. External lookups degrade to
//! bundled samples and local heuristics; the analysis report is always
//! structurally complete, whatever happened along the way.

pub mod analysis;
pub mod config;
pub mod models;
pub mod sources;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding application. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
