use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// Kinds allowed as an artifact's primary stat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PrimaryStatKind {
    AtkPercent,
    HpPercent,
    DefPercent,
    ElementalMastery,
    CritRate,
    CritDmg,
    EnergyRecharge,
    PhysicalDmgBonus,
    ElementalDmgBonus,
    HealingBonus,
    /// A kind decoded from a snapshot that is not in the enumeration.
    Unrecognized(String),
}

impl PrimaryStatKind {
    /// Every member of the enumeration, in wire order.
    pub const ALL: [PrimaryStatKind; 10] = [
        Self::AtkPercent,
        Self::HpPercent,
        Self::DefPercent,
        Self::ElementalMastery,
        Self::CritRate,
        Self::CritDmg,
        Self::EnergyRecharge,
        Self::PhysicalDmgBonus,
        Self::ElementalDmgBonus,
        Self::HealingBonus,
    ];

    /// Wire name, e.g. `ATK_PERCENT`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::AtkPercent => "ATK_PERCENT",
            Self::HpPercent => "HP_PERCENT",
            Self::DefPercent => "DEF_PERCENT",
            Self::ElementalMastery => "ELEMENTAL_MASTERY",
            Self::CritRate => "CRIT_RATE",
            Self::CritDmg => "CRIT_DMG",
            Self::EnergyRecharge => "ENERGY_RECHARGE",
            Self::PhysicalDmgBonus => "PHYSICAL_DMG_BONUS",
            Self::ElementalDmgBonus => "ELEMENTAL_DMG_BONUS",
            Self::HealingBonus => "HEALING_BONUS",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// `false` only for [`PrimaryStatKind::Unrecognized`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl FromStr for PrimaryStatKind {
    type Err = TypeError;

    fn from_str(s: &str) -> TypeResult<Self> {
        Self::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .cloned()
            .ok_or_else(|| TypeError::InvalidPrimaryStatKind(s.to_string()))
    }
}

impl From<String> for PrimaryStatKind {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(kind) => kind,
            Err(_) => Self::Unrecognized(raw),
        }
    }
}

impl From<PrimaryStatKind> for String {
    fn from(kind: PrimaryStatKind) -> Self {
        match kind {
            PrimaryStatKind::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PrimaryStatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds allowed as a secondary stat. Damage and healing bonuses are
/// primary-only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SecondaryStatKind {
    AtkPercent,
    HpPercent,
    DefPercent,
    ElementalMastery,
    CritRate,
    CritDmg,
    EnergyRecharge,
    /// A kind decoded from a snapshot that is not in the enumeration.
    Unrecognized(String),
}

impl SecondaryStatKind {
    /// Every member of the enumeration, in wire order.
    pub const ALL: [SecondaryStatKind; 7] = [
        Self::AtkPercent,
        Self::HpPercent,
        Self::DefPercent,
        Self::ElementalMastery,
        Self::CritRate,
        Self::CritDmg,
        Self::EnergyRecharge,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::AtkPercent => "ATK_PERCENT",
            Self::HpPercent => "HP_PERCENT",
            Self::DefPercent => "DEF_PERCENT",
            Self::ElementalMastery => "ELEMENTAL_MASTERY",
            Self::CritRate => "CRIT_RATE",
            Self::CritDmg => "CRIT_DMG",
            Self::EnergyRecharge => "ENERGY_RECHARGE",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl FromStr for SecondaryStatKind {
    type Err = TypeError;

    fn from_str(s: &str) -> TypeResult<Self> {
        Self::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .cloned()
            .ok_or_else(|| TypeError::InvalidSecondaryStatKind(s.to_string()))
    }
}

impl From<String> for SecondaryStatKind {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(kind) => kind,
            Err(_) => Self::Unrecognized(raw),
        }
    }
}

impl From<SecondaryStatKind> for String {
    fn from(kind: SecondaryStatKind) -> Self {
        match kind {
            SecondaryStatKind::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SecondaryStatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single headline stat of an artifact.
///
/// Serialized as `{"Type": ..., "Value": ...}`. The value is not range checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrimaryStat {
    #[serde(rename = "Type")]
    kind: PrimaryStatKind,
    #[serde(rename = "Value")]
    value: f64,
}

impl PrimaryStat {
    /// Build a primary stat from a raw kind name.
    pub fn new(kind: &str, value: f64) -> TypeResult<Self> {
        Ok(Self {
            kind: kind.parse()?,
            value,
        })
    }

    pub fn kind(&self) -> &PrimaryStatKind {
        &self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// One of the ordered secondary stats ("substats") of an artifact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecondaryStat {
    #[serde(rename = "Type")]
    kind: SecondaryStatKind,
    #[serde(rename = "Value")]
    value: f64,
}

impl SecondaryStat {
    /// Build a secondary stat from a raw kind name.
    pub fn new(kind: &str, value: f64) -> TypeResult<Self> {
        Ok(Self {
            kind: kind.parse()?,
            value,
        })
    }

    pub fn kind(&self) -> &SecondaryStatKind {
        &self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_stat_accepts_every_primary_kind() {
        for kind in PrimaryStatKind::ALL {
            let stat = PrimaryStat::new(kind.as_str(), 46.6).unwrap();
            assert_eq!(stat.kind(), &kind);
            assert_eq!(stat.value(), 46.6);
        }
    }

    #[test]
    fn primary_stat_rejects_unknown_kind() {
        let err = PrimaryStat::new("INVALID", 0.0).unwrap_err();
        assert_eq!(err, TypeError::InvalidPrimaryStatKind("INVALID".into()));
    }

    #[test]
    fn primary_stat_value_is_not_range_checked() {
        let stat = PrimaryStat::new("CRIT_DMG", -1e9).unwrap();
        assert_eq!(stat.value(), -1e9);
    }

    #[test]
    fn secondary_stat_accepts_every_secondary_kind() {
        for kind in SecondaryStatKind::ALL {
            let stat = SecondaryStat::new(kind.as_str(), 3.9).unwrap();
            assert_eq!(stat.kind(), &kind);
        }
    }

    #[test]
    fn secondary_stat_rejects_bonus_kinds() {
        for raw in ["PHYSICAL_DMG_BONUS", "ELEMENTAL_DMG_BONUS", "HEALING_BONUS"] {
            let err = SecondaryStat::new(raw, 1.0).unwrap_err();
            assert_eq!(err, TypeError::InvalidSecondaryStatKind(raw.into()));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("atk_percent".parse::<PrimaryStatKind>().is_err());
        assert!("Crit_Rate".parse::<SecondaryStatKind>().is_err());
    }

    #[test]
    fn lenient_conversion_keeps_unknown_text() {
        let kind = PrimaryStatKind::from("SHIELD_STRENGTH".to_string());
        assert_eq!(kind, PrimaryStatKind::Unrecognized("SHIELD_STRENGTH".into()));
        assert!(!kind.is_known());
        assert_eq!(String::from(kind), "SHIELD_STRENGTH");

        let known = SecondaryStatKind::from("CRIT_RATE".to_string());
        assert_eq!(known, SecondaryStatKind::CritRate);
    }

    #[test]
    fn stat_json_shape() {
        let stat = PrimaryStat::new("ATK_PERCENT", 0.5).unwrap();
        let json = serde_json::to_value(&stat).unwrap();
        assert_eq!(json, serde_json::json!({"Type": "ATK_PERCENT", "Value": 0.5}));
    }

    #[test]
    fn decoding_tolerates_unknown_kind() {
        let stat: SecondaryStat =
            serde_json::from_str(r#"{"Type":"FLAT_ATK","Value":19.0}"#).unwrap();
        assert_eq!(stat.kind(), &SecondaryStatKind::Unrecognized("FLAT_ATK".into()));
        let back = serde_json::to_string(&stat).unwrap();
        assert!(back.contains("\"FLAT_ATK\""));
    }
}
