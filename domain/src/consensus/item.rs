//! Consensus summary items

use super::topic::ConsensusStatus;
use crate::specialist::Specialist;
use serde::{Deserialize, Serialize};

/// A specialist chip shown next to a consensus item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub color: String,
    pub initial: String,
}

impl From<&Specialist> for Participant {
    fn from(specialist: &Specialist) -> Self {
        Self {
            id: specialist.id.to_string(),
            color: specialist.color.to_string(),
            initial: specialist.initial(),
        }
    }
}

/// One row of the consensus report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusItem {
    pub topic: String,
    pub status: ConsensusStatus,
    /// Contributing turn texts joined in arrival order
    pub details: String,
    pub specialists: Vec<Participant>,
}

impl ConsensusItem {
    pub fn new(
        topic: impl Into<String>,
        status: ConsensusStatus,
        details: impl Into<String>,
        specialists: Vec<Participant>,
    ) -> Self {
        Self {
            topic: topic.into(),
            status,
            details: details.into(),
            specialists,
        }
    }

    /// Ids of the contributing specialists
    pub fn specialist_ids(&self) -> Vec<&str> {
        self.specialists.iter().map(|p| p.id.as_str()).collect()
    }
}
