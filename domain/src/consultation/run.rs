//! Sequencer run aggregate

use super::case_input::CaseInput;
use crate::consensus::{ConsensusExtractor, ConsensusItem};
use crate::script::{ScriptGenerator, Turn, Variation};
use crate::specialist::Specialist;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Everything one consultation needs, computed up front
///
/// The script and consensus are derived together in
/// [`SequencerRun::prepare`] and never change afterwards; playback only
/// reveals what is already here.
#[derive(Debug, Clone, Serialize)]
pub struct SequencerRun {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub selected: Vec<Specialist>,
    pub case_input: CaseInput,
    pub script: Vec<Turn>,
    pub consensus: Vec<ConsensusItem>,
}

impl SequencerRun {
    /// Generate the script and extract the consensus in one pass
    pub fn prepare(
        selected: Vec<Specialist>,
        case_input: CaseInput,
        variation: &dyn Variation,
    ) -> Self {
        let script = ScriptGenerator::generate(&selected, case_input.content(), variation);
        let consensus = ConsensusExtractor::extract(&script, &selected);

        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            selected,
            case_input,
            script,
            consensus,
        }
    }

    /// Number of turns playback will reveal
    pub fn turn_count(&self) -> usize {
        self.script.len()
    }

    pub fn has_participants(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Comma-separated display names of the panel
    pub fn panel_names(&self) -> String {
        self.selected
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
