//! Domain layer for tumor-board
//!
//! This crate contains the core entities and the pure sequencing logic of a
//! simulated multi-specialist tumor board. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Specialists
//!
//! A static registry of specialist roles ([`Specialist`], [`SpecialistKind`]).
//! [`triage::suggest`] maps a case description to a suggested panel.
//!
//! ## Script
//!
//! [`ScriptGenerator`] turns a confirmed panel and a case description into
//! an ordered list of [`Turn`]s: an opening, rule-driven contributions, an
//! optional consensus poll and a closing summary.
//!
//! ## Consensus
//!
//! [`ConsensusExtractor`] buckets the script's turns into fixed topics and
//! produces the [`ConsensusItem`]s shown in the final report.
//!
//! ```text
//! case text ──► triage::suggest ──► confirmed panel
//!                                        │
//!                     ScriptGenerator ◄──┘
//!                           │
//!                   ConsensusExtractor
//!                           │
//!                     SequencerRun ──► playback (application layer)
//! ```

pub mod config;
pub mod consensus;
pub mod consultation;
pub mod core;
pub mod script;
pub mod specialist;
pub mod triage;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use consensus::{
    ConsensusExtractor, ConsensusItem, ConsensusStatus, ConsensusTopic, GENERAL_DISCUSSION,
    Participant, TOPICS,
};
pub use consultation::{CaseInput, SequencerRun};
pub use core::error::DomainError;
pub use script::{FixedVariation, ScriptGenerator, Turn, TurnKind, Variation};
pub use specialist::{Specialist, SpecialistKind, Speaker};
