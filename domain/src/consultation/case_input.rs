//! Case input value object

use serde::{Deserialize, Serialize};

/// Free-text description of a patient case (Value Object)
///
/// Unlike most inputs this never rejects: blank text is a valid, if
/// uninformative, case. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseInput {
    content: String,
}

impl CaseInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into().trim().to_string(),
        }
    }

    /// Get the case text
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for CaseInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for CaseInput {
    fn from(s: &str) -> Self {
        CaseInput::new(s)
    }
}

impl From<String> for CaseInput {
    fn from(s: String) -> Self {
        CaseInput::new(s)
    }
}
