//! Consultation scripts
//!
//! A script is the ordered list of [`Turn`]s for one simulated tumor board.
//! [`ScriptGenerator`] builds it from the selected panel and the case text;
//! wording variation is injected through [`Variation`].

pub mod generator;
pub mod rules;
pub mod turn;
pub mod variation;

pub use generator::ScriptGenerator;
pub use rules::{CONTRIBUTION_RULES, Condition, ContributionRule, ScriptContext};
pub use turn::{Turn, TurnKind};
pub use variation::{FixedVariation, Variation};
