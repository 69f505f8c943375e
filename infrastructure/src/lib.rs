//! Infrastructure layer for tumor-board
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod pacing;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileConsultationConfig, FileOutputConfig, FilePlaybackConfig,
};
pub use logging::JsonlTranscriptLogger;
pub use pacing::RandomPacing;
