//! Consultation aggregate
//!
//! - [`CaseInput`]: the free-text case under discussion
//! - [`SequencerRun`]: selected panel, script and consensus of one run

pub mod case_input;
pub mod run;

pub use case_input::CaseInput;
pub use run::SequencerRun;
