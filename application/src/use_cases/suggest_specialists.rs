//! Suggest Specialists use case
//!
//! Turns a free-text case description into a suggested panel.

use board_domain::triage;
use board_domain::{CaseInput, Specialist};
use tracing::debug;

/// Use case for suggesting a panel from a case description
#[derive(Debug, Default, Clone, Copy)]
pub struct SuggestSpecialistsUseCase;

impl SuggestSpecialistsUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Suggested specialists in registry order; never empty
    pub fn execute(&self, case: &CaseInput) -> Vec<Specialist> {
        let suggested: Vec<Specialist> = triage::suggest(case.content())
            .into_iter()
            .map(Specialist::get)
            .collect();

        debug!(
            "Triage suggested {} specialist(s): {}",
            suggested.len(),
            suggested.iter().map(|s| s.id).collect::<Vec<_>>().join(", ")
        );

        suggested
    }
}
