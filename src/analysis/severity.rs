use super::types::InteractionSeverity;

/// Trigger terms that mark an interaction description as major. Checked
/// before the moderate set: a text containing both tiers classifies major.
static MAJOR_TRIGGERS: &[&str] = &[
    "contraindicated",
    "avoid",
    "severe",
    "fatal",
    "death",
    "warning",
    "life-threatening",
    "serious",
    "hemorrhage",
    "discontinue",
];

/// Trigger terms for moderate severity.
static MODERATE_TRIGGERS: &[&str] = &[
    "caution",
    "monitor",
    "adjust",
    "may affect",
    "may increase",
    "may decrease",
    "potential",
    "interfere",
    "reduce",
];

/// Classify free-text interaction or warning prose into a severity tier.
///
/// Plain lowercase substring matching against fixed trigger tables. This
/// is a coarse heuristic over label prose, not clinical judgment; the
/// extraction layer pairs it with conservative default guidance.
pub fn classify_severity(text: &str) -> InteractionSeverity {
    let lower = text.to_lowercase();

    if MAJOR_TRIGGERS.iter().any(|t| lower.contains(t)) {
        return InteractionSeverity::Major;
    }
    if MODERATE_TRIGGERS.iter().any(|t| lower.contains(t)) {
        return InteractionSeverity::Moderate;
    }
    InteractionSeverity::Minor
}
