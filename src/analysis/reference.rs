use serde::{Deserialize, Serialize};

use super::types::{AnalysisError, InteractionSeverity};

/// A medication name prone to confusion with similarly named products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LasaEntry {
    pub name: String,
    pub confused_with: Vec<String>,
}

/// One healthcare-associated infection pattern: keyword sets matched
/// against the patient's symptom and diagnosis names, plus the prevention
/// guidance to surface on a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HaiPattern {
    pub code: String,
    pub description: String,
    pub symptom_keywords: Vec<String>,
    pub diagnosis_keywords: Vec<String>,
    pub prevention_tips: Vec<String>,
}

/// Static reference tables behind the medication-error and infection
/// analyses. Data lives apart from the matching logic so the tables can
/// be extended or overridden without touching control flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub high_alert_medications: Vec<String>,
    pub lasa_pairs: Vec<LasaEntry>,
    pub hai_patterns: Vec<HaiPattern>,
}

impl ReferenceData {
    /// Load reference tables from a JSON override file.
    pub fn load(path: &std::path::Path) -> Result<Self, AnalysisError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::ReferenceDataLoad(path.display().to_string(), e.to_string())
        })?;
        serde_json::from_str(&json).map_err(|e| {
            AnalysisError::ReferenceDataParse(path.display().to_string(), e.to_string())
        })
    }

    /// The compiled-in tables used when no override file is provided.
    pub fn builtin() -> Self {
        Self {
            high_alert_medications: [
                "insulin",
                "warfarin",
                "heparin",
                "enoxaparin",
                "apixaban",
                "rivaroxaban",
                "morphine",
                "fentanyl",
                "oxycodone",
                "hydromorphone",
                "methadone",
                "opioid",
                "methotrexate",
                "chemotherapy",
                "digoxin",
                "potassium chloride",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            lasa_pairs: vec![
                lasa("hydroxyzine", &["hydralazine"]),
                lasa("hydralazine", &["hydroxyzine"]),
                lasa("clonidine", &["klonopin", "clonazepam"]),
                lasa("clonazepam", &["clonidine", "lorazepam"]),
                lasa("metformin", &["metronidazole"]),
                lasa("metronidazole", &["metformin"]),
                lasa("prednisone", &["prednisolone"]),
                lasa("celebrex", &["celexa", "cerebyx"]),
                lasa("celexa", &["celebrex", "zyprexa"]),
                lasa("lamictal", &["lamisil"]),
                lasa("tramadol", &["trazodone"]),
                lasa("trazodone", &["tramadol"]),
                lasa("bupropion", &["buspirone"]),
                lasa("buspirone", &["bupropion"]),
                lasa("zantac", &["zyrtec", "xanax"]),
            ],
            hai_patterns: vec![
                HaiPattern {
                    code: "CLABSI".into(),
                    description: "Central line-associated bloodstream infection".into(),
                    symptom_keywords: strings(&[
                        "fever", "chills", "redness", "swelling", "drainage",
                    ]),
                    diagnosis_keywords: strings(&[
                        "central line", "central venous", "picc", "port", "iv therapy",
                    ]),
                    prevention_tips: strings(&[
                        "Keep the line dressing clean and dry.",
                        "Ask care staff to clean their hands before touching the line.",
                        "Report any redness, soreness, or leaking around the site.",
                    ]),
                },
                HaiPattern {
                    code: "CAUTI".into(),
                    description: "Catheter-associated urinary tract infection".into(),
                    symptom_keywords: strings(&[
                        "burning", "urgency", "frequency", "cloudy urine", "pelvic pain",
                        "fever",
                    ]),
                    diagnosis_keywords: strings(&["urinary catheter", "foley", "catheter"]),
                    prevention_tips: strings(&[
                        "Ask daily whether the catheter is still needed.",
                        "Keep the drainage bag below the level of the bladder.",
                        "Report burning, pain, or changes in urine promptly.",
                    ]),
                },
                HaiPattern {
                    code: "SSI".into(),
                    description: "Surgical site infection".into(),
                    symptom_keywords: strings(&[
                        "redness", "warmth", "drainage", "pus", "fever", "wound pain",
                    ]),
                    diagnosis_keywords: strings(&[
                        "surgery", "surgical", "post-operative", "postoperative", "incision",
                    ]),
                    prevention_tips: strings(&[
                        "Follow the wound-care instructions you were given.",
                        "Wash hands before touching the incision area.",
                        "Report spreading redness, drainage, or fever to your surgeon.",
                    ]),
                },
                HaiPattern {
                    code: "VAP".into(),
                    description: "Ventilator-associated pneumonia".into(),
                    symptom_keywords: strings(&[
                        "cough", "fever", "shortness of breath", "sputum",
                    ]),
                    diagnosis_keywords: strings(&[
                        "ventilator", "intubation", "mechanical ventilation",
                    ]),
                    prevention_tips: strings(&[
                        "Keep the head of the bed raised as advised.",
                        "Follow mouth-care routines while on breathing support.",
                    ]),
                },
                HaiPattern {
                    code: "CDIFF".into(),
                    description: "Clostridioides difficile infection".into(),
                    symptom_keywords: strings(&[
                        "diarrhea", "abdominal pain", "cramping", "fever", "nausea",
                    ]),
                    diagnosis_keywords: strings(&[
                        "antibiotic", "clostridioides", "c. diff", "colitis",
                    ]),
                    prevention_tips: strings(&[
                        "Wash hands with soap and water; sanitizer alone is not enough.",
                        "Take antibiotics only as prescribed and finish the course.",
                        "Report watery diarrhea during or after antibiotics.",
                    ]),
                },
                HaiPattern {
                    code: "MRSA".into(),
                    description: "Methicillin-resistant Staphylococcus aureus infection".into(),
                    symptom_keywords: strings(&[
                        "boil", "abscess", "redness", "swelling", "pus", "fever",
                    ]),
                    diagnosis_keywords: strings(&[
                        "mrsa", "staph", "skin infection", "wound",
                    ]),
                    prevention_tips: strings(&[
                        "Keep cuts and scrapes clean and covered until healed.",
                        "Do not share towels, razors, or personal items.",
                        "Report skin areas that are red, swollen, or draining.",
                    ]),
                },
            ],
        }
    }

    /// The first high-alert class a medication name matches, if any.
    pub fn high_alert_match(&self, medication: &str) -> Option<&str> {
        let lower = medication.to_lowercase();
        self.high_alert_medications
            .iter()
            .find(|klass| lower.contains(klass.as_str()))
            .map(|klass| klass.as_str())
    }

    /// Look-alike/sound-alike entry for a medication name, if any.
    pub fn lasa_match(&self, medication: &str) -> Option<&LasaEntry> {
        let lower = medication.to_lowercase();
        self.lasa_pairs
            .iter()
            .find(|entry| lower.contains(&entry.name))
    }
}

fn lasa(name: &str, confused_with: &[&str]) -> LasaEntry {
    LasaEntry {
        name: name.to_string(),
        confused_with: confused_with.iter().map(|s| s.to_string()).collect(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Canned recommendation tiers used when no prescriptive sentence could
/// be extracted from label text.
pub fn default_recommendations(severity: InteractionSeverity) -> Vec<String> {
    match severity {
        InteractionSeverity::Major => strings(&[
            "Do not start or stop either medication without talking to your prescriber.",
            "Ask your doctor or pharmacist about this combination as soon as possible.",
            "Watch for unusual symptoms and seek care if you feel unwell.",
        ]),
        InteractionSeverity::Moderate => strings(&[
            "Mention this combination at your next appointment.",
            "Your doctor may want to monitor you or adjust a dose.",
            "Take both medications exactly as prescribed in the meantime.",
        ]),
        InteractionSeverity::Minor => strings(&[
            "No routine changes are usually needed for this combination.",
            "Mention it to your pharmacist next time you refill either prescription.",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_infection_patterns() {
        let reference = ReferenceData::builtin();
        assert_eq!(reference.hai_patterns.len(), 6);
        let codes: Vec<&str> = reference
            .hai_patterns
            .iter()
            .map(|p| p.code.as_str())
            .collect();
        assert_eq!(codes, ["CLABSI", "CAUTI", "SSI", "VAP", "CDIFF", "MRSA"]);
    }

    #[test]
    fn high_alert_matches_substring() {
        let reference = ReferenceData::builtin();
        assert_eq!(
            reference.high_alert_match("Insulin Glargine"),
            Some("insulin")
        );
        assert_eq!(reference.high_alert_match("Warfarin 5mg"), Some("warfarin"));
        assert!(reference.high_alert_match("Loratadine").is_none());
    }

    #[test]
    fn lasa_match_is_case_insensitive() {
        let reference = ReferenceData::builtin();
        let entry = reference.lasa_match("Hydroxyzine HCl").unwrap();
        assert_eq!(entry.confused_with, vec!["hydralazine"]);
        assert!(reference.lasa_match("amoxicillin").is_none());
    }

    #[test]
    fn default_recommendations_cover_every_tier() {
        for severity in [
            InteractionSeverity::Minor,
            InteractionSeverity::Moderate,
            InteractionSeverity::Major,
        ] {
            assert!(!default_recommendations(severity).is_empty());
        }
    }

    #[test]
    fn load_reads_json_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reference.json");
        let custom = ReferenceData {
            high_alert_medications: vec!["testdrug".into()],
            lasa_pairs: vec![],
            hai_patterns: vec![],
        };
        std::fs::write(&path, serde_json::to_string(&custom).unwrap()).unwrap();

        let loaded = ReferenceData::load(&path).unwrap();
        assert_eq!(loaded.high_alert_medications, vec!["testdrug"]);
        assert!(loaded.hai_patterns.is_empty());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = ReferenceData::load(std::path::Path::new("/nonexistent/ref.json"))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::ReferenceDataLoad(_, _)));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reference.json");
        std::fs::write(&path, "{ nope").unwrap();
        let err = ReferenceData::load(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::ReferenceDataParse(_, _)));
    }
}
