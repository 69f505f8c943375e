//! Randomized pacing and phrasing.
//!
//! Provides [`RandomPacing`], the production implementation of both the
//! [`Pacing`](board_application::Pacing) and
//! [`Variation`](board_domain::Variation) ports.

mod random;

pub use random::RandomPacing;
