use serde::Deserialize;

/// Response envelope from the openFDA label search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelSearchResponse {
    pub results: Option<Vec<DrugLabel>>,
}

/// One structured product label. Every section is optional: an absent
/// field means the manufacturer did not report it, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrugLabel {
    pub drug_interactions: Option<Vec<String>>,
    pub warnings: Option<Vec<String>>,
    pub adverse_reactions: Option<Vec<String>>,
    pub openfda: Option<OpenFdaMeta>,
}

/// Harmonized name metadata openFDA attaches to a label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenFdaMeta {
    pub brand_name: Option<Vec<String>>,
    pub generic_name: Option<Vec<String>>,
}

impl DrugLabel {
    /// The label's interaction section joined into one text block.
    pub fn interaction_text(&self) -> Option<String> {
        join_section(self.drug_interactions.as_deref())
    }

    /// Adverse-reaction text, falling back to the warnings section.
    pub fn adverse_text(&self) -> Option<String> {
        join_section(self.adverse_reactions.as_deref())
            .or_else(|| join_section(self.warnings.as_deref()))
    }
}

fn join_section(section: Option<&[String]>) -> Option<String> {
    let parts: Vec<&str> = section?
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
