//! Fixed clinical vocabularies for degraded-mode matching

use clinex_domain::Category;

/// One category's keyword vocabulary and the constants stamped on every
/// record it produces.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FallbackVocabulary {
    /// Category the vocabulary feeds
    pub category: Category,

    /// Lower-case terms, scanned in declaration order
    pub terms: &'static [&'static str],

    /// Coding system stamped on synthesized records
    pub code_system: &'static str,

    /// Confidence stamped on synthesized records
    pub confidence: f64,
}

const PROBLEM_TERMS: &[&str] = &[
    "hypertension",
    "diabetes",
    "stemi",
    "myocardial infarction",
    "chest pain",
    "hyperlipidemia",
    "pain",
    "infection",
    "fever",
    "pneumonia",
    "copd",
    "heart failure",
    "arrhythmia",
    "stroke",
    "asthma",
];

const PROCEDURE_TERMS: &[&str] = &[
    "catheterization",
    "surgery",
    "biopsy",
    "intubation",
    "procedure",
    "operation",
    "endoscopy",
    "colonoscopy",
    "angiography",
    "stent",
];

const MEDICATION_TERMS: &[&str] = &[
    "aspirin",
    "metformin",
    "lisinopril",
    "atorvastatin",
    "clopidogrel",
    "heparin",
    "insulin",
    "warfarin",
    "levothyroxine",
    "amlodipine",
    "omeprazole",
    "prednisone",
    "albuterol",
];

const LAB_TERMS: &[&str] = &[
    "troponin",
    "ekg",
    "blood pressure",
    "heart rate",
    "glucose",
    "hemoglobin",
    "creatinine",
    "bun",
    "wbc",
    "platelets",
    "inr",
    "cholesterol",
    "ldl",
    "hdl",
    "triglycerides",
];

/// The four vocabularies, scanned independently and in this order.
pub(crate) const VOCABULARIES: [FallbackVocabulary; 4] = [
    FallbackVocabulary {
        category: Category::Problems,
        terms: PROBLEM_TERMS,
        code_system: "ICD-10-CM",
        confidence: 0.85,
    },
    FallbackVocabulary {
        category: Category::Procedures,
        terms: PROCEDURE_TERMS,
        code_system: "CPT",
        confidence: 0.80,
    },
    FallbackVocabulary {
        category: Category::Medications,
        terms: MEDICATION_TERMS,
        code_system: "RxNorm",
        confidence: 0.90,
    },
    FallbackVocabulary {
        category: Category::Labs,
        terms: LAB_TERMS,
        code_system: "LOINC",
        confidence: 0.75,
    },
];
