//! Consensus topics and statuses

use serde::{Deserialize, Serialize};

/// How settled a topic is
///
/// Variants are ordered from least to most settled, so elevating a status
/// is `max(current, target)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusStatus {
    Pending,
    Discussed,
    Proposed,
    Agreed,
    Confirmed,
}

impl ConsensusStatus {
    /// Raise the status to at least `target`; never lowers it
    pub fn elevate(self, target: ConsensusStatus) -> ConsensusStatus {
        self.max(target)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsensusStatus::Pending => "Pending",
            ConsensusStatus::Discussed => "Discussed",
            ConsensusStatus::Proposed => "Proposed",
            ConsensusStatus::Agreed => "Agreed",
            ConsensusStatus::Confirmed => "Confirmed",
        }
    }
}

impl std::fmt::Display for ConsensusStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fixed discussion category used to bucket turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsensusTopic {
    pub name: &'static str,
    /// Lower-case fragments matched by substring containment
    pub keywords: &'static [&'static str],
    /// Status before any consensus poll touches the topic
    pub baseline: ConsensusStatus,
}

pub const IMAGING_FINDINGS: ConsensusTopic = ConsensusTopic {
    name: "Imaging Findings",
    keywords: &["imaging", "scan", "lesion", "mri", "nodule", "enhancement"],
    baseline: ConsensusStatus::Confirmed,
};

pub const PATHOLOGY_REPORT: ConsensusTopic = ConsensusTopic {
    name: "Pathology Report",
    keywords: &["biopsy", "histolog", "patholog", "margin", "grade", "immunohisto"],
    baseline: ConsensusStatus::Confirmed,
};

pub const TREATMENT_PLAN: ConsensusTopic = ConsensusTopic {
    name: "Treatment Plan",
    keywords: &["treatment", "therapy", "chemotherapy", "regimen", "systemic"],
    baseline: ConsensusStatus::Agreed,
};

pub const SURGICAL_ASSESSMENT: ConsensusTopic = ConsensusTopic {
    name: "Surgical Assessment",
    keywords: &["surgical", "surgery", "resect", "operable", "excision"],
    baseline: ConsensusStatus::Discussed,
};

pub const NEXT_STEPS: ConsensusTopic = ConsensusTopic {
    name: "Next Steps",
    keywords: &["next step", "follow-up", "schedule", "recommend", "agree"],
    baseline: ConsensusStatus::Pending,
};

/// Topic catalogue in declaration (and output) order
pub const TOPICS: [ConsensusTopic; 5] = [
    IMAGING_FINDINGS,
    PATHOLOGY_REPORT,
    TREATMENT_PLAN,
    SURGICAL_ASSESSMENT,
    NEXT_STEPS,
];

/// Name of the item produced when no topic collects any turn
pub const GENERAL_DISCUSSION: &str = "General Discussion";
