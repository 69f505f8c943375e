//! Configuration issues reported by config validation.
//!
//! Validation never fails hard on its own; it returns every detected
//! [`ConfigIssue`] and the caller decides what an [`Severity::Error`] means.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A specialist id that is not in the registry.
    UnknownSpecialist { field: String, value: String },
    /// A delay band whose minimum exceeds its maximum.
    InvertedDelayBand { min_ms: u64, max_ms: u64 },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
