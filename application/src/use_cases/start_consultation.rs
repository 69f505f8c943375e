//! Start Consultation use case
//!
//! Confirms a panel and prepares the [`SequencerRun`] that playback reveals.

use board_domain::{CaseInput, SequencerRun, Specialist, SpecialistKind, Variation};
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the StartConsultation use case
#[derive(Debug, Clone, Default)]
pub struct StartConsultationInput {
    /// Free-text case description
    pub case: CaseInput,
    /// Confirmed panel, in the order the user picked it
    pub specialists: Vec<SpecialistKind>,
}

impl StartConsultationInput {
    pub fn new(case: impl Into<CaseInput>, specialists: Vec<SpecialistKind>) -> Self {
        Self {
            case: case.into(),
            specialists,
        }
    }

    /// Panel with repeated picks removed, first pick wins
    pub fn panel(&self) -> Vec<Specialist> {
        let mut panel: Vec<Specialist> = Vec::with_capacity(self.specialists.len());
        for kind in &self.specialists {
            if !panel.iter().any(|s| s.kind == *kind) {
                panel.push(Specialist::get(*kind));
            }
        }
        panel
    }
}

/// Use case for preparing a consultation
pub struct StartConsultationUseCase {
    variation: Arc<dyn Variation>,
}

impl StartConsultationUseCase {
    pub fn new(variation: Arc<dyn Variation>) -> Self {
        Self { variation }
    }

    /// Generate the script and consensus for the confirmed panel
    ///
    /// An empty panel is not an error: the run then carries the system
    /// notice and the closing summary only.
    pub fn execute(&self, input: StartConsultationInput) -> SequencerRun {
        let panel = input.panel();
        if panel.is_empty() {
            warn!("Starting consultation with no specialists selected");
        }

        let run = SequencerRun::prepare(panel, input.case, self.variation.as_ref());
        info!(
            "Prepared run {} with {} turn(s) and {} consensus item(s)",
            run.id,
            run.turn_count(),
            run.consensus.len()
        );
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_domain::{FixedVariation, Speaker};

    fn use_case() -> StartConsultationUseCase {
        StartConsultationUseCase::new(Arc::new(FixedVariation(true)))
    }

    #[test]
    fn test_duplicate_picks_are_dropped() {
        let input = StartConsultationInput::new(
            "lung mass",
            vec![
                SpecialistKind::Surgeon,
                SpecialistKind::Radiologist,
                SpecialistKind::Surgeon,
            ],
        );
        let ids: Vec<_> = input.panel().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["surgeon", "radiologist"]);
    }

    #[test]
    fn test_execute_prepares_script_and_consensus() {
        let run = use_case().execute(StartConsultationInput::new(
            "55-year-old with a lung mass",
            vec![SpecialistKind::Radiologist, SpecialistKind::Oncologist],
        ));

        assert_eq!(run.selected.len(), 2);
        assert_eq!(
            run.script[0].speaker,
            Speaker::Specialist(SpecialistKind::Radiologist)
        );
        assert!(run.script.last().unwrap().is_summary());
        assert!(!run.consensus.is_empty());
    }

    #[test]
    fn test_empty_panel_still_produces_a_run() {
        let run = use_case().execute(StartConsultationInput::default());

        assert!(!run.has_participants());
        assert!(run.script.iter().all(|t| t.is_system()));
        assert!(run.consensus.is_empty());
    }
}
