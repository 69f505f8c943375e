//! Case triage heuristic
//!
//! Maps a free-text case description to the specialists worth inviting.
//! This is a keyword lookup, not a classifier: every specialist owns a
//! fixed list of lower-case fragments, and a specialist is suggested when
//! any fragment occurs anywhere in the lower-cased text.

use crate::core::string::contains_any;
use crate::specialist::SpecialistKind;
use std::collections::BTreeSet;

/// Keyword fragments per specialist, matched by substring containment
pub const TRIAGE_KEYWORDS: &[(SpecialistKind, &[&str])] = &[
    (
        SpecialistKind::Cardiologist,
        &["heart", "cardiac", "chest pain", "arrhythmia", "ecg"],
    ),
    (
        SpecialistKind::Radiologist,
        &["image", "imaging", "scan", "ct", "mri", "x-ray", "ultrasound"],
    ),
    (
        SpecialistKind::Oncologist,
        &[
            "cancer", "tumor", "tumour", "mass", "malignan", "metasta", "chemo", "lymphoma",
        ],
    ),
    (
        SpecialistKind::Pathologist,
        &["biopsy", "histolog", "patholog", "cytolog", "specimen"],
    ),
    (
        SpecialistKind::Surgeon,
        &["surgery", "surgical", "resect", "excision", "operat"],
    ),
    (
        SpecialistKind::RadiationOncologist,
        &["radiation", "radiotherapy", "stereotactic", "brachytherapy"],
    ),
    (
        SpecialistKind::Neurologist,
        &["brain", "seizure", "headache", "neuro", "stroke"],
    ),
];

/// Suggestion used when no keyword matches
pub const DEFAULT_SUGGESTION: [SpecialistKind; 2] =
    [SpecialistKind::Oncologist, SpecialistKind::Radiologist];

/// Suggest specialists for a case description
///
/// Never returns an empty set: text with no recognizable keyword (including
/// empty text) yields [`DEFAULT_SUGGESTION`].
///
/// ```
/// use board_domain::triage::suggest;
/// use board_domain::SpecialistKind;
///
/// let picks = suggest("Patient reports chest pain; CT scan pending");
/// assert!(picks.contains(&SpecialistKind::Cardiologist));
/// assert!(picks.contains(&SpecialistKind::Radiologist));
/// ```
pub fn suggest(case_text: &str) -> BTreeSet<SpecialistKind> {
    let matched: BTreeSet<SpecialistKind> = TRIAGE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| contains_any(case_text, keywords))
        .map(|(kind, _)| *kind)
        .collect();

    if matched.is_empty() {
        DEFAULT_SUGGESTION.into_iter().collect()
    } else {
        matched
    }
}
