//! Specialist registry
//!
//! The static catalogue of specialist roles that can take part in a
//! simulated tumor board, plus [`Speaker`], the author of a script turn.

pub mod entities;
pub mod speaker;

pub use entities::{Specialist, SpecialistKind};
pub use speaker::Speaker;
