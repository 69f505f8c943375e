//! Seedable random source for typing delays and flavor phrases.

use board_application::{Pacing, PlaybackConfig};
use board_domain::{Speaker, Variation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

/// Random pacing within the configured specialist delay band.
///
/// With a seed, the sequence of delays and coin flips is reproducible.
/// Lead-in and system delays are always fixed.
pub struct RandomPacing {
    config: PlaybackConfig,
    rng: Mutex<StdRng>,
}

impl RandomPacing {
    pub fn new(config: PlaybackConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                debug!("Seeding pacing with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // A panic mid-draw leaves the generator itself intact
        self.rng.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Pacing for RandomPacing {
    fn lead_in(&self) -> Duration {
        self.config.lead_in
    }

    fn typing_delay(&self, speaker: &Speaker) -> Duration {
        if speaker.is_system() {
            return self.config.system_delay;
        }

        let (min, max) = self.config.specialist_band();
        if min == max {
            return min;
        }
        let ms = self
            .rng()
            .gen_range(min.as_millis() as u64..=max.as_millis() as u64);
        Duration::from_millis(ms)
    }
}

impl Variation for RandomPacing {
    fn coin_flip(&self) -> bool {
        self.rng().gen_bool(0.5)
    }
}
