//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The sequencing operations themselves are total; these errors only arise
/// at the edges where free-form strings are turned into domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown specialist: {0}")]
    UnknownSpecialist(String),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
}
