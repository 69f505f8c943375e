//! Consultation configuration from TOML (`[consultation]` section)

use board_domain::{ConfigIssue, ConfigIssueCode, Severity, SpecialistKind};
use serde::{Deserialize, Serialize};

/// Raw consultation configuration from TOML
///
/// # Example
///
/// ```toml
/// [consultation]
/// default_specialists = ["radiologist", "pathologist", "oncologist"]
/// ```
///
/// An empty list means the panel comes from triage of the case text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsultationConfig {
    /// Specialist ids used when none are given on the command line
    pub default_specialists: Vec<String>,
}

impl FileConsultationConfig {
    /// Parse the default panel, reporting every unknown id as an error.
    pub fn parse_default_specialists(&self) -> (Vec<SpecialistKind>, Vec<ConfigIssue>) {
        let mut kinds = Vec::new();
        let mut issues = Vec::new();

        for id in &self.default_specialists {
            match id.parse::<SpecialistKind>() {
                Ok(kind) => kinds.push(kind),
                Err(_) => issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::UnknownSpecialist {
                        field: "consultation.default_specialists".to_string(),
                        value: id.clone(),
                    },
                    message: format!(
                        "consultation.default_specialists: unknown specialist '{}' (valid: {})",
                        id,
                        SpecialistKind::ALL
                            .iter()
                            .map(|k| k.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                }),
            }
        }

        (kinds, issues)
    }
}
