use std::sync::LazyLock;

use regex::Regex;

use super::reference::default_recommendations;
use super::types::InteractionSeverity;

/// Sentence boundary: terminal punctuation followed by whitespace.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("Invalid sentence boundary pattern"));

/// A sentence is considered relevant when it names either drug or uses
/// general interaction vocabulary.
static RELEVANCE_TERMS: &[&str] = &["interact", "effect", "risk", "may", "can", "should"];

/// Effect sentences are descriptive: they say what can happen.
static EFFECT_TERMS: &[&str] = &[
    "cause", "result", "lead to", "effect", "increas", "risk", "toxicity",
];

/// Prescriptive vocabulary disqualifies a sentence from the effects list.
static EFFECT_EXCLUDE_TERMS: &[&str] = &["should", "monitor", "avoid"];

/// Recommendation sentences tell the reader what to do.
static RECOMMENDATION_TERMS: &[&str] = &[
    "recommend", "should", "must", "advised", "monitor", "avoid",
];

const MIN_SENTENCE_CHARS: usize = 10;
const MIN_SENTENCE_WORDS: usize = 4;
const MAX_EFFECTS: usize = 4;
const MAX_RELEVANT_AS_EFFECTS: usize = 3;
const MAX_RECOMMENDATIONS: usize = 4;

/// Patient-facing guidance extracted from one block of label text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedGuidance {
    pub simplified_explanation: String,
    pub possible_effects: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Split label prose into tidy sentences: boundary on `.`/`!`/`?` plus
/// whitespace, short fragments dropped, first letter capitalized, trailing
/// period restored.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| s.len() >= MIN_SENTENCE_CHARS)
        .filter(|s| s.split_whitespace().count() >= MIN_SENTENCE_WORDS)
        .map(tidy_sentence)
        .collect()
}

fn tidy_sentence(fragment: &str) -> String {
    let mut chars = fragment.chars();
    let mut sentence = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    if !sentence.ends_with(['.', '!', '?']) {
        sentence.push('.');
    }
    sentence
}

/// Best-effort extraction of explanation, effects, and recommendations
/// from raw label text. Keyword heuristics over sentences — misses fall
/// back to severity-keyed templates so the output is never empty.
pub fn extract_guidance(
    text: &str,
    drug_a: &str,
    drug_b: &str,
    severity: InteractionSeverity,
) -> ExtractedGuidance {
    let sentences = split_sentences(text);
    let a = drug_a.to_lowercase();
    let b = drug_b.to_lowercase();

    let relevant: Vec<&String> = sentences
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            lower.contains(&a)
                || lower.contains(&b)
                || RELEVANCE_TERMS.iter().any(|t| lower.contains(t))
        })
        .collect();

    let effects: Vec<String> = sentences
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            EFFECT_TERMS.iter().any(|t| lower.contains(t))
                && !EFFECT_EXCLUDE_TERMS.iter().any(|t| lower.contains(t))
        })
        .take(MAX_EFFECTS)
        .cloned()
        .collect();

    let recommendations: Vec<String> = sentences
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            RECOMMENDATION_TERMS.iter().any(|t| lower.contains(t))
        })
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect();

    let simplified_explanation = relevant
        .first()
        .map(|s| (*s).clone())
        .unwrap_or_else(|| fallback_explanation(drug_a, drug_b, severity));

    let possible_effects = if !effects.is_empty() {
        effects
    } else if !relevant.is_empty() {
        relevant
            .iter()
            .take(MAX_RELEVANT_AS_EFFECTS)
            .map(|s| (*s).clone())
            .collect()
    } else {
        vec![format!(
            "See the full label text for details on {drug_a} and {drug_b}."
        )]
    };

    let recommendations = if !recommendations.is_empty() {
        recommendations
    } else {
        default_recommendations(severity)
    };

    ExtractedGuidance {
        simplified_explanation,
        possible_effects,
        recommendations,
    }
}

fn fallback_explanation(drug_a: &str, drug_b: &str, severity: InteractionSeverity) -> String {
    match severity {
        InteractionSeverity::Major => format!(
            "{drug_a} and {drug_b} have a potentially serious interaction. \
             Talk to your doctor or pharmacist before taking them together."
        ),
        InteractionSeverity::Moderate => format!(
            "{drug_a} and {drug_b} may interact. \
             Your doctor may need to monitor or adjust your treatment."
        ),
        InteractionSeverity::Minor => format!(
            "{drug_a} and {drug_b} have a reported interaction. \
             It is usually not serious, but mention it to your pharmacist."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WARFARIN_ASPIRIN: &str =
        "Concurrent use of warfarin and aspirin may result in increased risk of \
         bleeding. Avoid concurrent use unless directed by a physician. Monitor \
         INR closely if the combination cannot be avoided.";

    // =================================================================
    // SENTENCE SPLITTING
    // =================================================================

    #[test]
    fn splits_on_terminal_punctuation() {
        let sentences = split_sentences(WARFARIN_ASPIRIN);
        assert_eq!(sentences.len(), 3);
        assert!(sentences[0].starts_with("Concurrent use"));
        assert!(sentences[1].starts_with("Avoid concurrent"));
    }

    #[test]
    fn short_fragments_dropped() {
        let sentences = split_sentences("Yes. No! This sentence is long enough to keep.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn few_word_fragments_dropped() {
        // Over 10 characters but fewer than 4 words.
        let sentences = split_sentences("Hyperkalemia reported. Patients receiving both agents need review.");
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].starts_with("Patients receiving"));
    }

    #[test]
    fn first_letter_capitalized_and_period_restored() {
        let sentences = split_sentences(
            "the anticoagulant effect may be potentiated! watch for unusual bruising and bleeding",
        );
        assert_eq!(sentences[0].chars().next().unwrap(), 'T');
        assert!(sentences[1].ends_with('.'));
    }

    #[test]
    fn empty_text_yields_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    // =================================================================
    // EXTRACTION
    // =================================================================

    #[test]
    fn explanation_is_first_relevant_sentence() {
        let guidance = extract_guidance(
            WARFARIN_ASPIRIN,
            "Warfarin",
            "Aspirin",
            InteractionSeverity::Major,
        );
        assert!(guidance.simplified_explanation.contains("warfarin"));
        assert!(guidance.simplified_explanation.contains("bleeding"));
    }

    #[test]
    fn effects_exclude_prescriptive_sentences() {
        let guidance = extract_guidance(
            WARFARIN_ASPIRIN,
            "Warfarin",
            "Aspirin",
            InteractionSeverity::Major,
        );
        // "Avoid concurrent use..." and "Monitor INR..." are prescriptive.
        assert_eq!(guidance.possible_effects.len(), 1);
        assert!(guidance.possible_effects[0].contains("risk of bleeding"));
    }

    #[test]
    fn recommendations_capture_prescriptive_sentences() {
        let guidance = extract_guidance(
            WARFARIN_ASPIRIN,
            "Warfarin",
            "Aspirin",
            InteractionSeverity::Major,
        );
        assert_eq!(guidance.recommendations.len(), 2);
        assert!(guidance.recommendations[0].starts_with("Avoid"));
        assert!(guidance.recommendations[1].starts_with("Monitor"));
    }

    #[test]
    fn recommendations_capped_at_four() {
        let text = "You should rest today. You should drink water often. \
                    You should call the office soon. You should check the label. \
                    You should ask the pharmacist about it.";
        let guidance =
            extract_guidance(text, "DrugA", "DrugB", InteractionSeverity::Minor);
        assert_eq!(guidance.recommendations.len(), 4);
    }

    #[test]
    fn empty_text_uses_severity_templates() {
        let guidance = extract_guidance("", "Warfarin", "Aspirin", InteractionSeverity::Major);
        assert!(guidance.simplified_explanation.contains("Warfarin"));
        assert!(guidance.simplified_explanation.contains("serious"));
        assert_eq!(guidance.possible_effects.len(), 1);
        assert!(!guidance.recommendations.is_empty());
    }

    #[test]
    fn irrelevant_text_still_produces_complete_guidance() {
        let text = "Store at room temperature away from light and moisture always.";
        let guidance =
            extract_guidance(text, "Warfarin", "Aspirin", InteractionSeverity::Minor);
        // "can"/"may" style vocabulary is absent, both drug names absent.
        assert!(guidance.simplified_explanation.contains("Warfarin"));
        assert!(!guidance.possible_effects.is_empty());
        assert!(!guidance.recommendations.is_empty());
    }

    #[test]
    fn relevant_sentences_stand_in_for_missing_effects() {
        // Relevant (mentions drug) but no effect vocabulary and no
        // prescriptive vocabulary.
        let text = "Warfarin exposure was unchanged in healthy volunteers.";
        let guidance =
            extract_guidance(text, "Warfarin", "Aspirin", InteractionSeverity::Minor);
        assert_eq!(guidance.possible_effects.len(), 1);
        assert!(guidance.possible_effects[0].contains("Warfarin"));
    }

    #[test]
    fn extraction_is_deterministic() {
        let first = extract_guidance(
            WARFARIN_ASPIRIN,
            "Warfarin",
            "Aspirin",
            InteractionSeverity::Major,
        );
        let second = extract_guidance(
            WARFARIN_ASPIRIN,
            "Warfarin",
            "Aspirin",
            InteractionSeverity::Major,
        );
        assert_eq!(first, second);
    }
}
