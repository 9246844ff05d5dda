use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// Equipment slot of an artifact.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArtifactType {
    Flower,
    Plume,
    Sands,
    Goblet,
    Circlet,
    /// A slot decoded from a snapshot that is not in the enumeration.
    Unrecognized(String),
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 5] = [
        Self::Flower,
        Self::Plume,
        Self::Sands,
        Self::Goblet,
        Self::Circlet,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Flower => "FLOWER",
            Self::Plume => "PLUME",
            Self::Sands => "SANDS",
            Self::Goblet => "GOBLET",
            Self::Circlet => "CIRCLET",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl FromStr for ArtifactType {
    type Err = TypeError;

    fn from_str(s: &str) -> TypeResult<Self> {
        Self::ALL
            .iter()
            .find(|slot| slot.as_str() == s)
            .cloned()
            .ok_or_else(|| TypeError::InvalidArtifactType(s.to_string()))
    }
}

impl From<String> for ArtifactType {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(slot) => slot,
            Err(_) => Self::Unrecognized(raw),
        }
    }
}

impl From<ArtifactType> for String {
    fn from(slot: ArtifactType) -> Self {
        match slot {
            ArtifactType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
