//! Script turns

use crate::specialist::{SpecialistKind, Speaker};
use serde::{Deserialize, Serialize};

/// Role a turn plays in the discussion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    #[default]
    Normal,
    /// A turn asking the board to agree on a set of points
    ConsensusPoll,
    /// The closing system turn of every script
    Summary,
}

impl std::fmt::Display for TurnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnKind::Normal => write!(f, "normal"),
            TurnKind::ConsensusPoll => write!(f, "consensus_poll"),
            TurnKind::Summary => write!(f, "summary"),
        }
    }
}

/// One authored message in a generated script
///
/// Turns are generated in one batch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub content: String,
    pub kind: TurnKind,
}

impl Turn {
    pub fn new(speaker: impl Into<Speaker>, content: impl Into<String>, kind: TurnKind) -> Self {
        Self {
            speaker: speaker.into(),
            content: content.into(),
            kind,
        }
    }

    /// A normal turn from a specialist
    pub fn said(kind: SpecialistKind, content: impl Into<String>) -> Self {
        Self::new(kind, content, TurnKind::Normal)
    }

    /// A consensus poll from a specialist
    pub fn poll(kind: SpecialistKind, content: impl Into<String>) -> Self {
        Self::new(kind, content, TurnKind::ConsensusPoll)
    }

    /// A normal system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Speaker::System, content, TurnKind::Normal)
    }

    /// The closing system summary turn
    pub fn summary(content: impl Into<String>) -> Self {
        Self::new(Speaker::System, content, TurnKind::Summary)
    }

    pub fn is_system(&self) -> bool {
        self.speaker.is_system()
    }

    pub fn is_poll(&self) -> bool {
        self.kind == TurnKind::ConsensusPoll
    }

    pub fn is_summary(&self) -> bool {
        self.kind == TurnKind::Summary
    }
}
