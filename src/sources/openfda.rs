use crate::config;

use super::label::{DrugLabel, LabelSearchResponse};
use super::sample;
use super::{InteractionText, LabelSource, SourceError};

/// Provenance string attached to results fetched from the live endpoint.
const OPENFDA_PROVENANCE: &str = "FDA drug label (openFDA)";

/// Client for the public openFDA drug-label database.
///
/// Lookups run through an ordered ladder of search strategies; the first
/// strategy that produces label text wins. A failing strategy is logged
/// and the next one runs — a single flaky query never sinks the lookup.
pub struct OpenFdaClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

/// One targeted search expression plus a short tag for logging.
struct SearchStrategy {
    query: String,
    tag: &'static str,
}

impl OpenFdaClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client against the public api.fda.gov endpoint with the standard
    /// lookup timeout.
    pub fn default_public() -> Self {
        Self::new(config::OPENFDA_LABEL_URL, config::LOOKUP_TIMEOUT_SECS)
    }

    /// The four targeted strategies: the partner drug named in the
    /// interaction section while the subject drug matches the label's
    /// brand name, then the same with roles swapped, then both again
    /// against the generic name.
    fn targeted_strategies(drug_a: &str, drug_b: &str) -> [SearchStrategy; 4] {
        [
            SearchStrategy {
                query: format!(
                    r#"drug_interactions:"{drug_b}" AND openfda.brand_name:"{drug_a}""#
                ),
                tag: "brand a<-b",
            },
            SearchStrategy {
                query: format!(
                    r#"drug_interactions:"{drug_a}" AND openfda.brand_name:"{drug_b}""#
                ),
                tag: "brand b<-a",
            },
            SearchStrategy {
                query: format!(
                    r#"drug_interactions:"{drug_b}" AND openfda.generic_name:"{drug_a}""#
                ),
                tag: "generic a<-b",
            },
            SearchStrategy {
                query: format!(
                    r#"drug_interactions:"{drug_a}" AND openfda.generic_name:"{drug_b}""#
                ),
                tag: "generic b<-a",
            },
        ]
    }

    fn search(&self, query: &str, limit: usize) -> Result<Vec<DrugLabel>, SourceError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("search", query), ("limit", limit.as_str())])
            .send()
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        // openFDA reports an empty result set as 404, not as an empty list.
        if status.as_u16() == 404 {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body: LabelSearchResponse = response
            .json()
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        Ok(body.results.unwrap_or_default())
    }

    fn map_transport_error(&self, e: reqwest::Error) -> SourceError {
        if e.is_connect() {
            SourceError::Connect(self.base_url.clone())
        } else if e.is_timeout() {
            SourceError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            SourceError::Decode(e.to_string())
        }
    }
}

impl LabelSource for OpenFdaClient {
    fn find_interaction(
        &self,
        drug_a: &str,
        drug_b: &str,
    ) -> Result<Option<InteractionText>, SourceError> {
        let mut last_error: Option<SourceError> = None;

        for strategy in Self::targeted_strategies(drug_a, drug_b) {
            match self.search(&strategy.query, 1) {
                Ok(labels) => {
                    if let Some(text) = labels.iter().find_map(|l| l.interaction_text()) {
                        tracing::debug!(
                            drug_a = %drug_a,
                            drug_b = %drug_b,
                            strategy = strategy.tag,
                            "Interaction text found"
                        );
                        return Ok(Some(InteractionText {
                            text,
                            source: OPENFDA_PROVENANCE.to_string(),
                        }));
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        drug_a = %drug_a,
                        drug_b = %drug_b,
                        strategy = strategy.tag,
                        error = %e,
                        "Lookup strategy failed, trying next"
                    );
                    last_error = Some(e);
                }
            }
        }

        // Broad fallback: any label whose interaction section names the
        // subject drug, scanned for a mention of the partner.
        let broad = format!(r#"drug_interactions:"{drug_a}""#);
        match self.search(&broad, config::BROAD_SCAN_LIMIT) {
            Ok(labels) => {
                let needle = drug_b.to_lowercase();
                for label in &labels {
                    if let Some(text) = label.interaction_text() {
                        if text.to_lowercase().contains(&needle) {
                            tracing::debug!(
                                drug_a = %drug_a,
                                drug_b = %drug_b,
                                strategy = "broad scan",
                                "Interaction text found"
                            );
                            return Ok(Some(InteractionText {
                                text,
                                source: OPENFDA_PROVENANCE.to_string(),
                            }));
                        }
                    }
                }
            }
            Err(e) => {
                tracing::debug!(
                    drug_a = %drug_a,
                    drug_b = %drug_b,
                    strategy = "broad scan",
                    error = %e,
                    "Lookup strategy failed"
                );
                last_error = Some(e);
            }
        }

        // Bundled sample data covers a handful of well-known pairs when
        // the live endpoint has nothing or is unreachable.
        if let Some(hit) = sample::interaction(drug_a, drug_b) {
            return Ok(Some(hit));
        }

        match last_error {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }

    fn adverse_reactions(&self, drug: &str) -> Result<Option<String>, SourceError> {
        let mut last_error: Option<SourceError> = None;

        let queries = [
            format!(r#"openfda.brand_name:"{drug}""#),
            format!(r#"openfda.generic_name:"{drug}""#),
        ];
        for query in &queries {
            match self.search(query, 1) {
                Ok(labels) => {
                    if let Some(text) = labels.iter().find_map(|l| l.adverse_text()) {
                        return Ok(Some(text));
                    }
                }
                Err(e) => {
                    tracing::debug!(drug = %drug, error = %e, "Adverse-reaction lookup failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }
}
