use crate::sources::LabelSource;

use super::extract::extract_guidance;
use super::severity::classify_severity;
use super::types::{InteractionCheck, InteractionRecord};

/// Check every unordered pair of medication names against the label
/// source. Pairs are generated index-wise (i < j, first index ascending)
/// so output order is stable; blank names are skipped. A pair the source
/// cannot resolve is omitted — the only failure signal kept is the
/// overall `all_pairs_checked` flag.
pub fn check_interactions<S: LabelSource + ?Sized>(
    source: &S,
    medication_names: &[String],
) -> InteractionCheck {
    let mut records = Vec::new();
    let mut all_pairs_checked = true;
    let mut pairs = 0usize;

    for i in 0..medication_names.len() {
        let drug_a = medication_names[i].trim();
        if drug_a.is_empty() {
            continue;
        }
        for name_b in &medication_names[i + 1..] {
            let drug_b = name_b.trim();
            if drug_b.is_empty() {
                continue;
            }
            pairs += 1;

            match source.find_interaction(drug_a, drug_b) {
                Ok(Some(hit)) => {
                    let severity = classify_severity(&hit.text);
                    let guidance = extract_guidance(&hit.text, drug_a, drug_b, severity);
                    records.push(InteractionRecord {
                        drug1: drug_a.to_string(),
                        drug2: drug_b.to_string(),
                        severity,
                        description: hit.text,
                        simplified_explanation: guidance.simplified_explanation,
                        possible_effects: guidance.possible_effects,
                        recommendations: guidance.recommendations,
                        source: hit.source,
                    });
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(
                        drug_a = %drug_a,
                        drug_b = %drug_b,
                        error = %e,
                        "Interaction lookup failed for pair"
                    );
                    all_pairs_checked = false;
                }
            }
        }
    }

    tracing::info!(
        pairs,
        found = records.len(),
        complete = all_pairs_checked,
        "Interaction check finished"
    );

    InteractionCheck {
        records,
        all_pairs_checked,
    }
}
