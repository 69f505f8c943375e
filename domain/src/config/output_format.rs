//! Output format value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Output format for consultation reports
///
/// This is a domain concept representing how the finished run is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Transcript followed by the consensus report
    Full,
    /// Only the consensus report (default)
    #[default]
    Summary,
    /// The whole run as JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(OutputFormat::Full),
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            other => Err(DomainError::UnknownOutputFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_summary() {
        assert_eq!(OutputFormat::default(), OutputFormat::Summary);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Full).unwrap();
        assert_eq!(json, "\"full\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_parse() {
        assert_eq!("SUMMARY".parse::<OutputFormat>().ok(), Some(OutputFormat::Summary));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
