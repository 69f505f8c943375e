//! Application layer for tumor-board
//!
//! This crate contains use cases, port definitions, and playback configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PlaybackConfig;
pub use ports::{
    pacing::{FixedPacing, Pacing},
    transcript::{CompositeTranscript, NoTranscript, TranscriptSink},
};
pub use use_cases::consultation_controller::{ConsultationController, ConsultationError};
pub use use_cases::playback::{
    PlaybackError, PlaybackHandle, PlaybackSequencer, PlaybackState, TurnPhase,
};
pub use use_cases::start_consultation::{StartConsultationInput, StartConsultationUseCase};
pub use use_cases::suggest_specialists::SuggestSpecialistsUseCase;
