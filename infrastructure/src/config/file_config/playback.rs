//! Playback configuration from TOML (`[playback]` section)

use board_application::PlaybackConfig;
use board_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw playback configuration from TOML
///
/// # Example
///
/// ```toml
/// [playback]
/// lead_in_ms = 500
/// system_delay_ms = 1000
/// specialist_delay_min_ms = 1500
/// specialist_delay_max_ms = 3000
/// seed = 42          # optional, makes pacing and phrasing reproducible
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePlaybackConfig {
    pub lead_in_ms: u64,
    pub system_delay_ms: u64,
    pub specialist_delay_min_ms: u64,
    pub specialist_delay_max_ms: u64,
    pub seed: Option<u64>,
}

impl Default for FilePlaybackConfig {
    fn default() -> Self {
        Self {
            lead_in_ms: 500,
            system_delay_ms: 1000,
            specialist_delay_min_ms: 1500,
            specialist_delay_max_ms: 3000,
            seed: None,
        }
    }
}

impl FilePlaybackConfig {
    /// Convert to [`PlaybackConfig`], reporting an inverted delay band.
    ///
    /// An inverted band is still usable: the bounds are swapped.
    pub fn to_playback_config(&self) -> (PlaybackConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.specialist_delay_min_ms > self.specialist_delay_max_ms {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvertedDelayBand {
                    min_ms: self.specialist_delay_min_ms,
                    max_ms: self.specialist_delay_max_ms,
                },
                message: format!(
                    "playback.specialist_delay_min_ms ({}) exceeds specialist_delay_max_ms ({}); bounds will be swapped",
                    self.specialist_delay_min_ms, self.specialist_delay_max_ms
                ),
            });
        }

        let config = PlaybackConfig::default()
            .with_lead_in(Duration::from_millis(self.lead_in_ms))
            .with_system_delay(Duration::from_millis(self.system_delay_ms))
            .with_specialist_band(
                Duration::from_millis(self.specialist_delay_min_ms),
                Duration::from_millis(self.specialist_delay_max_ms),
            )
            .with_seed(self.seed);

        (config, issues)
    }
}
