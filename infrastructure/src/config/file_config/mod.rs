//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod consultation;
mod output;
mod playback;

pub use consultation::FileConsultationConfig;
pub use output::FileOutputConfig;
pub use playback::FilePlaybackConfig;

use board_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Reveal pacing
    pub playback: FilePlaybackConfig,
    /// Default panel
    pub consultation: FileConsultationConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Unknown specialist ids in the default panel
    /// 2. An inverted specialist delay band
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Specialist ids
        issues.extend(self.consultation.parse_default_specialists().1);

        // 2. Delay band
        issues.extend(self.playback.to_playback_config().1);

        issues
    }
}
