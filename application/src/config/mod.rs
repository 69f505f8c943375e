//! Application-level configuration.
//!
//! - [`PlaybackConfig`]: pacing of the transcript reveal

pub mod playback_config;

pub use playback_config::PlaybackConfig;
