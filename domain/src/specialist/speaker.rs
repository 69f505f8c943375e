//! Turn authorship

use super::entities::{Specialist, SpecialistKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Who authored a turn: the board itself or one specialist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    System,
    Specialist(SpecialistKind),
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::System => "system",
            Speaker::Specialist(kind) => kind.as_str(),
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Speaker::System)
    }

    /// Specialist kind, or `None` for system turns
    pub fn kind(&self) -> Option<SpecialistKind> {
        match self {
            Speaker::System => None,
            Speaker::Specialist(kind) => Some(*kind),
        }
    }

    /// Registry entry, or `None` for system turns
    pub fn specialist(&self) -> Option<Specialist> {
        self.kind().map(Specialist::get)
    }

    /// Name shown in transcripts
    pub fn display_name(&self) -> &'static str {
        match self {
            Speaker::System => "System",
            Speaker::Specialist(kind) => Specialist::get(*kind).name,
        }
    }
}

impl From<SpecialistKind> for Speaker {
    fn from(kind: SpecialistKind) -> Self {
        Speaker::Specialist(kind)
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Speaker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Speaker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == "system" {
            return Ok(Speaker::System);
        }
        s.parse::<SpecialistKind>()
            .map(Speaker::Specialist)
            .map_err(serde::de::Error::custom)
    }
}
