use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// The named set an artifact belongs to.
///
/// Serialized by display name (e.g. `"Gladiator's Finale"`). Older data
/// files used short names such as `"Gladiator"`; those parse to the same
/// variant and are written back in the long form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArtifactSet {
    GladiatorsFinale,
    WanderersTroupe,
    NoblesseOblige,
    BloodstainedChivalry,
    MaidenBeloved,
    ViridescentVenerer,
    /// A set decoded from a snapshot that is not in the enumeration.
    Unrecognized(String),
}

impl ArtifactSet {
    pub const ALL: [ArtifactSet; 6] = [
        Self::GladiatorsFinale,
        Self::WanderersTroupe,
        Self::NoblesseOblige,
        Self::BloodstainedChivalry,
        Self::MaidenBeloved,
        Self::ViridescentVenerer,
    ];

    /// Display name used on the wire and in snapshots.
    pub fn as_str(&self) -> &str {
        match self {
            Self::GladiatorsFinale => "Gladiator's Finale",
            Self::WanderersTroupe => "Wanderer's Troupe",
            Self::NoblesseOblige => "Noblesse Oblige",
            Self::BloodstainedChivalry => "Bloodstained Chivalry",
            Self::MaidenBeloved => "Maiden Beloved",
            Self::ViridescentVenerer => "Viridescent Venerer",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Short name accepted for compatibility with older data files.
    fn legacy_name(&self) -> Option<&'static str> {
        match self {
            Self::GladiatorsFinale => Some("Gladiator"),
            Self::WanderersTroupe => Some("Wanderer"),
            Self::NoblesseOblige => Some("Noblesse"),
            Self::BloodstainedChivalry => Some("Bloodstained"),
            Self::MaidenBeloved => Some("Maiden"),
            Self::ViridescentVenerer => Some("Vermillion"),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl FromStr for ArtifactSet {
    type Err = TypeError;

    fn from_str(s: &str) -> TypeResult<Self> {
        Self::ALL
            .iter()
            .find(|set| set.as_str() == s || set.legacy_name() == Some(s))
            .cloned()
            .ok_or_else(|| TypeError::InvalidArtifactSet(s.to_string()))
    }
}

impl From<String> for ArtifactSet {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(set) => set,
            Err(_) => Self::Unrecognized(raw),
        }
    }
}

impl From<ArtifactSet> for String {
    fn from(set: ArtifactSet) -> Self {
        match set {
            ArtifactSet::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ArtifactSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names() {
        for set in ArtifactSet::ALL {
            assert_eq!(set.as_str().parse::<ArtifactSet>().unwrap(), set);
        }
    }

    #[test]
    fn parses_legacy_names() {
        assert_eq!("Gladiator".parse::<ArtifactSet>().unwrap(), ArtifactSet::GladiatorsFinale);
        assert_eq!("Vermillion".parse::<ArtifactSet>().unwrap(), ArtifactSet::ViridescentVenerer);
        assert_eq!("Maiden".parse::<ArtifactSet>().unwrap(), ArtifactSet::MaidenBeloved);
    }

    #[test]
    fn legacy_names_serialize_in_long_form() {
        let set: ArtifactSet = serde_json::from_str(r#""Noblesse""#).unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#""Noblesse Oblige""#);
    }

    #[test]
    fn rejects_unknown_set() {
        let err = "Emblem of Severed Fate".parse::<ArtifactSet>().unwrap_err();
        assert_eq!(err, TypeError::InvalidArtifactSet("Emblem of Severed Fate".into()));
    }

    #[test]
    fn unknown_set_round_trips_through_json() {
        let set: ArtifactSet = serde_json::from_str(r#""Emblem of Severed Fate""#).unwrap();
        assert!(!set.is_known());
        assert_eq!(serde_json::to_string(&set).unwrap(), r#""Emblem of Severed Fate""#);
    }
}
