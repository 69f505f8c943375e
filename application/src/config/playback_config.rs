//! Playback parameters: pacing of the staged transcript reveal.
//!
//! [`PlaybackConfig`] groups the delays used by the
//! [`PlaybackSequencer`](crate::use_cases::playback::PlaybackSequencer).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delays used while revealing a script.
///
/// | Delay | Applies to |
/// |-------|------------|
/// | `lead_in` | before every turn |
/// | `system_delay` | system turns, after the lead-in |
/// | `specialist_delay_min..=max` | specialist turns, while "typing" |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Fixed pause before each turn.
    pub lead_in: Duration,
    /// Fixed pause before a system turn is revealed.
    pub system_delay: Duration,
    /// Lower bound of the randomized typing delay for specialists.
    pub specialist_delay_min: Duration,
    /// Upper bound of the randomized typing delay for specialists.
    pub specialist_delay_max: Duration,
    /// Seed for reproducible pacing and flavor phrases.
    pub seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            lead_in: Duration::from_millis(500),
            system_delay: Duration::from_millis(1000),
            specialist_delay_min: Duration::from_millis(1500),
            specialist_delay_max: Duration::from_millis(3000),
            seed: None,
        }
    }
}

impl PlaybackConfig {
    /// All delays zero (used by `--instant` and tests)
    pub fn instant() -> Self {
        Self {
            lead_in: Duration::ZERO,
            system_delay: Duration::ZERO,
            specialist_delay_min: Duration::ZERO,
            specialist_delay_max: Duration::ZERO,
            seed: None,
        }
    }

    /// Specialist delay band with the bounds in ascending order
    pub fn specialist_band(&self) -> (Duration, Duration) {
        if self.specialist_delay_min <= self.specialist_delay_max {
            (self.specialist_delay_min, self.specialist_delay_max)
        } else {
            (self.specialist_delay_max, self.specialist_delay_min)
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_lead_in(mut self, delay: Duration) -> Self {
        self.lead_in = delay;
        self
    }

    pub fn with_system_delay(mut self, delay: Duration) -> Self {
        self.system_delay = delay;
        self
    }

    pub fn with_specialist_band(mut self, min: Duration, max: Duration) -> Self {
        self.specialist_delay_min = min;
        self.specialist_delay_max = max;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
