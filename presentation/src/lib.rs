//! Presentation layer for tumor-board
//!
//! This crate contains the CLI definition, the console report formatter
//! and the live transcript renderer.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, ReportFormat};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleTranscript;
