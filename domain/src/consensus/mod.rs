//! Consensus summary domain
//!
//! Turns a finished script into the structured summary handed to the
//! report view. Topics come from a fixed catalogue ([`TOPICS`]); each run
//! yields one [`ConsensusItem`] per topic that collected a turn.

pub mod extractor;
pub mod item;
pub mod topic;

pub use extractor::ConsensusExtractor;
pub use item::{ConsensusItem, Participant};
pub use topic::{ConsensusStatus, ConsensusTopic, GENERAL_DISCUSSION, TOPICS};
