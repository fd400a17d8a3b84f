use super::InteractionText;

/// Provenance string for bundled results.
const SAMPLE_PROVENANCE: &str = "Bundled sample label data";

struct SampleInteraction {
    drug_a: &'static str,
    drug_b: &'static str,
    text: &'static str,
}

/// Well-known interaction pairs kept on hand for offline runs and demo
/// data. Label-style prose so the downstream extractor treats it exactly
/// like live text.
static SAMPLE_INTERACTIONS: &[SampleInteraction] = &[
    SampleInteraction {
        drug_a: "warfarin",
        drug_b: "aspirin",
        text: "Concurrent use of warfarin and aspirin may result in increased \
               risk of bleeding. Avoid concurrent use unless directed by a \
               physician. Monitor INR closely if the combination cannot be \
               avoided.",
    },
    SampleInteraction {
        drug_a: "warfarin",
        drug_b: "ibuprofen",
        text: "Nonsteroidal anti-inflammatory drugs such as ibuprofen may \
               potentiate the anticoagulant effect of warfarin and lead to \
               increased risk of serious bleeding. Avoid concurrent use. \
               Patients should monitor for signs of unusual bruising.",
    },
    SampleInteraction {
        drug_a: "lisinopril",
        drug_b: "spironolactone",
        text: "Use of lisinopril with potassium-sparing diuretics such as \
               spironolactone may result in severe hyperkalemia. Monitor \
               serum potassium periodically in patients receiving both \
               agents.",
    },
    SampleInteraction {
        drug_a: "simvastatin",
        drug_b: "clarithromycin",
        text: "Clarithromycin increases simvastatin exposure and the risk of \
               myopathy including rhabdomyolysis. Concurrent use is \
               contraindicated. Suspend simvastatin during a course of \
               clarithromycin.",
    },
    SampleInteraction {
        drug_a: "metformin",
        drug_b: "furosemide",
        text: "Furosemide may affect renal function and can increase \
               metformin plasma concentrations. Use with caution and adjust \
               the dose as needed.",
    },
];

/// Look up a bundled pair, either order, case-insensitive.
pub fn interaction(drug_a: &str, drug_b: &str) -> Option<InteractionText> {
    let a = drug_a.trim().to_lowercase();
    let b = drug_b.trim().to_lowercase();

    SAMPLE_INTERACTIONS
        .iter()
        .find(|s| {
            (a.contains(s.drug_a) && b.contains(s.drug_b))
                || (a.contains(s.drug_b) && b.contains(s.drug_a))
        })
        .map(|s| InteractionText {
            text: s.text.to_string(),
            source: SAMPLE_PROVENANCE.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_order_independent() {
        let forward = interaction("Warfarin", "Aspirin").unwrap();
        let reverse = interaction("Aspirin", "Warfarin").unwrap();
        assert_eq!(forward.text, reverse.text);
    }

    #[test]
    fn lookup_matches_brand_style_names() {
        // Patients often enter dose-qualified names.
        assert!(interaction("Warfarin 5mg", "aspirin 81mg").is_some());
    }

    #[test]
    fn unknown_pair_is_none() {
        assert!(interaction("Obscurol", "Fictivex").is_none());
    }

    #[test]
    fn sample_text_reads_like_a_label() {
        let hit = interaction("simvastatin", "clarithromycin").unwrap();
        assert!(hit.text.contains("contraindicated"));
        assert_eq!(hit.source, "Bundled sample label data");
    }
}
