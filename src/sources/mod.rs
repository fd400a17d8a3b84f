pub mod label;
pub mod openfda;
pub mod sample;

pub use label::{DrugLabel, LabelSearchResponse, OpenFdaMeta};
pub use openfda::OpenFdaClient;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Could not connect to {0}")]
    Connect(String),

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Label database returned HTTP {status}")]
    Status { status: u16 },

    #[error("Could not decode label response: {0}")]
    Decode(String),
}

impl SourceError {
    /// User-safe wording for surfacing a lookup failure. The pipeline
    /// itself never shows these; the presentation layer does.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Connect(_) => {
                "The drug information service could not be reached. \
                 Check your connection and try again."
            }
            Self::Timeout { .. } => {
                "The drug information service took too long to respond. \
                 Some checks may be incomplete."
            }
            Self::Status { status: 403 } => {
                "The drug information service declined the request."
            }
            Self::Status { status: 429 } => {
                "The drug information service is busy right now. \
                 Try again in a few minutes."
            }
            Self::Status { status } if *status >= 500 => {
                "The drug information service is having trouble. \
                 Some checks may be incomplete."
            }
            Self::Status { .. } | Self::Decode(_) => {
                "Drug information could not be retrieved. \
                 Some checks may be incomplete."
            }
        }
    }
}

/// Interaction text found for a pair of drugs, with provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionText {
    pub text: String,
    /// Where the text came from, e.g. "FDA drug label (openFDA)".
    pub source: String,
}

/// The external label database seam the pipeline depends on.
///
/// Implementations must be read-only and side-effect free; the pipeline
/// may call them once per medication pair per analysis run.
pub trait LabelSource {
    /// Find label text where one drug's interaction section mentions the
    /// other. `Ok(None)` means the database was reachable but has nothing
    /// for this pair; `Err` means every lookup attempt failed.
    fn find_interaction(
        &self,
        drug_a: &str,
        drug_b: &str,
    ) -> Result<Option<InteractionText>, SourceError>;

    /// Adverse-reaction / warning text for a single drug's label, if the
    /// label reports any.
    fn adverse_reactions(&self, drug: &str) -> Result<Option<String>, SourceError>;
}
