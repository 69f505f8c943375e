//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod consultation_controller;
pub mod playback;
pub mod start_consultation;
pub mod suggest_specialists;
