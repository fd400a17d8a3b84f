use crate::models::{Diagnosis, Medication, Symptom};
use crate::sources::LabelSource;

use super::extract::split_sentences;
use super::types::{MedicationEffect, MedicationEffects};

/// Offline hints: medication-name fragment paired with effects commonly
/// reported for that class. Used when the label source is unavailable.
static LOCAL_EFFECT_HINTS: &[(&str, &[&str])] = &[
    ("warfarin", &["bleeding", "bruising"]),
    ("aspirin", &["bleeding", "stomach pain", "heartburn"]),
    ("ibuprofen", &["stomach pain", "heartburn", "swelling"]),
    ("statin", &["muscle pain", "weakness"]),
    ("atorvastatin", &["muscle pain", "weakness"]),
    ("simvastatin", &["muscle pain", "weakness"]),
    ("lisinopril", &["cough", "dizziness"]),
    ("metformin", &["nausea", "diarrhea", "stomach pain"]),
    ("furosemide", &["dizziness", "dehydration", "cramping"]),
    ("opioid", &["constipation", "drowsiness", "nausea"]),
    ("oxycodone", &["constipation", "drowsiness", "nausea"]),
    ("morphine", &["constipation", "drowsiness", "nausea"]),
    ("insulin", &["dizziness", "sweating", "shakiness"]),
    ("prednisone", &["insomnia", "mood changes", "swelling"]),
];

/// Outcome of the medication-effect cross-check. `fell_back` reports that
/// at least one medication could not be checked against the live source
/// and local hints were used instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectsOutcome {
    pub effects: MedicationEffects,
    pub fell_back: bool,
}

/// For every active medication, look for its label mentioning something
/// the patient reports (active symptoms) or has on record (diagnoses).
/// One label fetch per medication; a fetch failure switches that
/// medication to the offline hint table.
pub fn cross_check_effects<S: LabelSource + ?Sized>(
    source: &S,
    medications: &[Medication],
    symptoms: &[Symptom],
    diagnoses: &[Diagnosis],
) -> EffectsOutcome {
    let mut outcome = EffectsOutcome::default();

    for medication in medications.iter().filter(|m| m.is_active()) {
        if medication.name.trim().is_empty() {
            continue;
        }

        match source.adverse_reactions(&medication.name) {
            Ok(Some(text)) => {
                for symptom in symptoms.iter().filter(|s| s.still_active) {
                    if let Some(effect) = label_effect(&medication.name, &symptom.name, &text)
                    {
                        outcome.effects.medication_symptom_effects.push(effect);
                    }
                }
                for diagnosis in diagnoses {
                    if let Some(effect) =
                        label_effect(&medication.name, &diagnosis.name, &text)
                    {
                        outcome.effects.medication_diagnosis_effects.push(effect);
                    }
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(
                    medication = %medication.name,
                    error = %e,
                    "Label fetch failed; using offline effect hints"
                );
                outcome.fell_back = true;
                for symptom in symptoms.iter().filter(|s| s.still_active) {
                    if let Some(effect) = hint_effect(&medication.name, &symptom.name) {
                        outcome.effects.medication_symptom_effects.push(effect);
                    }
                }
                for diagnosis in diagnoses {
                    if let Some(effect) = hint_effect(&medication.name, &diagnosis.name) {
                        outcome.effects.medication_diagnosis_effects.push(effect);
                    }
                }
            }
        }
    }

    outcome
}

/// Offline-only variant: the hint table for every medication, no source
/// calls at all. Used when a run must be rebuilt entirely locally.
pub fn local_only(
    medications: &[Medication],
    symptoms: &[Symptom],
    diagnoses: &[Diagnosis],
) -> MedicationEffects {
    let mut effects = MedicationEffects::default();
    for medication in medications.iter().filter(|m| m.is_active()) {
        for symptom in symptoms.iter().filter(|s| s.still_active) {
            if let Some(effect) = hint_effect(&medication.name, &symptom.name) {
                effects.medication_symptom_effects.push(effect);
            }
        }
        for diagnosis in diagnoses {
            if let Some(effect) = hint_effect(&medication.name, &diagnosis.name) {
                effects.medication_diagnosis_effects.push(effect);
            }
        }
    }
    effects
}

fn label_effect(medication: &str, subject: &str, label_text: &str) -> Option<MedicationEffect> {
    let needle = subject.trim().to_lowercase();
    if needle.is_empty() || !label_text.to_lowercase().contains(&needle) {
        return None;
    }

    let excerpt = split_sentences(label_text)
        .into_iter()
        .find(|s| s.to_lowercase().contains(&needle));

    Some(MedicationEffect {
        medication_name: medication.to_string(),
        subject_name: subject.to_string(),
        excerpt,
        note: format!(
            "The label for {medication} mentions {subject} among reported reactions."
        ),
    })
}

fn hint_effect(medication: &str, subject: &str) -> Option<MedicationEffect> {
    let med_lower = medication.to_lowercase();
    let subject_lower = subject.trim().to_lowercase();
    if subject_lower.is_empty() {
        return None;
    }

    let (_, known_effects) = LOCAL_EFFECT_HINTS
        .iter()
        .find(|(fragment, _)| med_lower.contains(fragment))?;

    known_effects
        .iter()
        .find(|e| subject_lower.contains(**e) || e.contains(subject_lower.as_str()))
        .map(|_| MedicationEffect {
            medication_name: medication.to_string(),
            subject_name: subject.to_string(),
            excerpt: None,
            note: format!(
                "{medication} is commonly associated with {subject} in offline \
                 reference data."
            ),
        })
}
