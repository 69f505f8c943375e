//! Flavor-phrase variation
//!
//! Some templates pick between two phrasings. The choice goes through
//! [`Variation`] so callers decide whether it is random or pinned.

/// Source of the coin flips used to pick flavor phrases
pub trait Variation: Send + Sync {
    /// Returns `true` for the first phrasing, `false` for the second
    fn coin_flip(&self) -> bool;

    /// Pick one of two phrases
    fn pick<'a>(&self, first: &'a str, second: &'a str) -> &'a str {
        if self.coin_flip() { first } else { second }
    }
}

/// Variation that always lands the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedVariation(pub bool);

impl Default for FixedVariation {
    fn default() -> Self {
        Self(true)
    }
}

impl Variation for FixedVariation {
    fn coin_flip(&self) -> bool {
        self.0
    }
}
