//! Live playback rendering

pub mod reporter;
