//! Specialist kinds and the static registry

use crate::core::error::DomainError;
use crate::core::string::initials;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kinds of specialists that can sit on the board (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecialistKind {
    Radiologist,
    Pathologist,
    Oncologist,
    Surgeon,
    RadiationOncologist,
    Cardiologist,
    Neurologist,
}

impl SpecialistKind {
    /// All kinds in registry order
    pub const ALL: [SpecialistKind; 7] = [
        SpecialistKind::Radiologist,
        SpecialistKind::Pathologist,
        SpecialistKind::Oncologist,
        SpecialistKind::Surgeon,
        SpecialistKind::RadiationOncologist,
        SpecialistKind::Cardiologist,
        SpecialistKind::Neurologist,
    ];

    /// Get the stable string identifier for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialistKind::Radiologist => "radiologist",
            SpecialistKind::Pathologist => "pathologist",
            SpecialistKind::Oncologist => "oncologist",
            SpecialistKind::Surgeon => "surgeon",
            SpecialistKind::RadiationOncologist => "radiation-oncologist",
            SpecialistKind::Cardiologist => "cardiologist",
            SpecialistKind::Neurologist => "neurologist",
        }
    }

    /// Registry entry for this kind
    pub fn specialist(&self) -> Specialist {
        Specialist::get(*self)
    }
}

impl std::fmt::Display for SpecialistKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpecialistKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "radiologist" | "radiology" => Ok(SpecialistKind::Radiologist),
            "pathologist" | "pathology" => Ok(SpecialistKind::Pathologist),
            "oncologist" | "oncology" => Ok(SpecialistKind::Oncologist),
            "surgeon" | "surgery" => Ok(SpecialistKind::Surgeon),
            "radiation-oncologist" | "radiation_oncologist" | "radiation" => {
                Ok(SpecialistKind::RadiationOncologist)
            }
            "cardiologist" | "cardiology" => Ok(SpecialistKind::Cardiologist),
            "neurologist" | "neurology" => Ok(SpecialistKind::Neurologist),
            _ => Err(DomainError::UnknownSpecialist(s.to_string())),
        }
    }
}

impl Serialize for SpecialistKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SpecialistKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A specialist profile from the static registry (Entity)
///
/// Profiles are constant for the lifetime of the process and looked up
/// by kind or id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Specialist {
    pub kind: SpecialistKind,
    pub id: &'static str,
    pub name: &'static str,
    /// Hex color used for transcript and chips (e.g. "#3b82f6")
    pub color: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

static REGISTRY: [Specialist; 7] = [
    Specialist {
        kind: SpecialistKind::Radiologist,
        id: "radiologist",
        name: "Radiologist",
        color: "#3b82f6",
        icon: "◉",
        description: "Interprets CT, MRI, PET and ultrasound studies",
    },
    Specialist {
        kind: SpecialistKind::Pathologist,
        id: "pathologist",
        name: "Pathologist",
        color: "#a855f7",
        icon: "✚",
        description: "Reviews biopsy, cytology and histology findings",
    },
    Specialist {
        kind: SpecialistKind::Oncologist,
        id: "oncologist",
        name: "Oncologist",
        color: "#ef4444",
        icon: "✦",
        description: "Leads systemic treatment planning and staging",
    },
    Specialist {
        kind: SpecialistKind::Surgeon,
        id: "surgeon",
        name: "Surgeon",
        color: "#22c55e",
        icon: "✂",
        description: "Assesses resectability and operative options",
    },
    Specialist {
        kind: SpecialistKind::RadiationOncologist,
        id: "radiation-oncologist",
        name: "Radiation Oncologist",
        color: "#f59e0b",
        icon: "☢",
        description: "Plans radiotherapy and stereotactic treatment",
    },
    Specialist {
        kind: SpecialistKind::Cardiologist,
        id: "cardiologist",
        name: "Cardiologist",
        color: "#ec4899",
        icon: "♥",
        description: "Evaluates cardiac risk and treatment-related cardiotoxicity",
    },
    Specialist {
        kind: SpecialistKind::Neurologist,
        id: "neurologist",
        name: "Neurologist",
        color: "#14b8a6",
        icon: "✺",
        description: "Assesses neurological symptoms and CNS involvement",
    },
];

impl Specialist {
    /// Look up the registry entry for a kind
    pub fn get(kind: SpecialistKind) -> Specialist {
        // REGISTRY is declared in the same order as SpecialistKind::ALL
        REGISTRY[kind as usize]
    }

    /// Look up a registry entry by its string id
    pub fn lookup(id: &str) -> Result<Specialist, DomainError> {
        id.parse::<SpecialistKind>().map(Specialist::get)
    }

    /// The full catalogue in declaration order
    pub fn all() -> &'static [Specialist] {
        &REGISTRY
    }

    /// Word initials of the display name ("Radiation Oncologist" -> "RO")
    pub fn initial(&self) -> String {
        initials(self.name)
    }
}

impl std::fmt::Display for Specialist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
