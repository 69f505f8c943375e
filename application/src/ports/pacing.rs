//! Pacing port
//!
//! The playback sequencer never decides delays itself; it asks a [`Pacing`]
//! provider. The randomized provider lives in infrastructure, so tests can
//! plug in [`FixedPacing`] and get a reproducible timeline.

use crate::config::PlaybackConfig;
use board_domain::Speaker;
use std::time::Duration;

/// Supplies the delays of a playback
pub trait Pacing: Send + Sync {
    /// Pause before a turn starts
    fn lead_in(&self) -> Duration;

    /// Pause between the typing indicator and the reveal
    fn typing_delay(&self, speaker: &Speaker) -> Duration;
}

/// Deterministic pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPacing {
    pub lead_in: Duration,
    pub system: Duration,
    pub specialist: Duration,
}

impl FixedPacing {
    pub fn new(lead_in: Duration, system: Duration, specialist: Duration) -> Self {
        Self {
            lead_in,
            system,
            specialist,
        }
    }

    /// No delays at all
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    /// Fixed pacing from a config, using the low end of the specialist band
    pub fn from_config(config: &PlaybackConfig) -> Self {
        Self::new(
            config.lead_in,
            config.system_delay,
            config.specialist_band().0,
        )
    }
}

impl Pacing for FixedPacing {
    fn lead_in(&self) -> Duration {
        self.lead_in
    }

    fn typing_delay(&self, speaker: &Speaker) -> Duration {
        if speaker.is_system() {
            self.system
        } else {
            self.specialist
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_domain::SpecialistKind;

    #[test]
    fn test_fixed_pacing_distinguishes_system() {
        let pacing = FixedPacing::new(
            Duration::from_millis(1),
            Duration::from_millis(2),
            Duration::from_millis(3),
        );
        assert_eq!(pacing.lead_in(), Duration::from_millis(1));
        assert_eq!(
            pacing.typing_delay(&Speaker::System),
            Duration::from_millis(2)
        );
        assert_eq!(
            pacing.typing_delay(&Speaker::Specialist(SpecialistKind::Surgeon)),
            Duration::from_millis(3)
        );
    }

    #[test]
    fn test_from_config_uses_band_minimum() {
        let pacing = FixedPacing::from_config(&PlaybackConfig::default());
        assert_eq!(pacing.specialist, Duration::from_millis(1500));
        assert_eq!(pacing.system, Duration::from_millis(1000));
    }
}
