use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{TypeError, TypeResult};
use crate::set::ArtifactSet;
use crate::slot::ArtifactType;
use crate::stat::{PrimaryStat, SecondaryStat};

/// A catalog item.
///
/// Built through [`Artifact::new`], which checks every invariant before
/// returning, so no partially valid artifact is ever observable. Artifacts
/// decoded from a snapshot skip that check; call [`Artifact::validate`] on
/// them before relying on their enumerations.
///
/// The serialized shape is the snapshot record:
/// `{ID, ArtifactSet, Type, Level, PrimaryStat: {Type, Value}, Substats: [{Type, Value}]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "ArtifactSet")]
    set: ArtifactSet,
    #[serde(rename = "Type")]
    artifact_type: ArtifactType,
    #[serde(rename = "Level")]
    level: i64,
    #[serde(rename = "PrimaryStat")]
    primary_stat: PrimaryStat,
    #[serde(rename = "Substats", default, deserialize_with = "null_as_empty")]
    secondary_stats: Vec<SecondaryStat>,
}

impl Artifact {
    /// Validate and assemble an artifact.
    ///
    /// Checks run in a fixed order and the first failure wins: id, set,
    /// type, primary stat kind, then each secondary stat kind in order.
    pub fn new(
        id: impl Into<String>,
        set: &str,
        artifact_type: &str,
        level: i64,
        primary_stat: PrimaryStat,
        secondary_stats: Vec<SecondaryStat>,
    ) -> TypeResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(TypeError::InvalidArtifactId);
        }
        let set: ArtifactSet = set.parse()?;
        let artifact_type: ArtifactType = artifact_type.parse()?;

        let artifact = Self {
            id,
            set,
            artifact_type,
            level,
            primary_stat,
            secondary_stats,
        };
        artifact.check_stats()?;
        Ok(artifact)
    }

    /// Re-run the constructor's checks against this artifact.
    pub fn validate(&self) -> TypeResult<()> {
        if self.id.is_empty() {
            return Err(TypeError::InvalidArtifactId);
        }
        if !self.set.is_known() {
            return Err(TypeError::InvalidArtifactSet(self.set.to_string()));
        }
        if !self.artifact_type.is_known() {
            return Err(TypeError::InvalidArtifactType(self.artifact_type.to_string()));
        }
        self.check_stats()
    }

    fn check_stats(&self) -> TypeResult<()> {
        let primary = self.primary_stat.kind();
        if !primary.is_known() {
            return Err(TypeError::InvalidPrimaryStatKind(primary.to_string()));
        }
        if let Some(bad) = self
            .secondary_stats
            .iter()
            .map(SecondaryStat::kind)
            .find(|kind| !kind.is_known())
        {
            return Err(TypeError::InvalidSecondaryStatKind(bad.to_string()));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set(&self) -> &ArtifactSet {
        &self.set
    }

    pub fn artifact_type(&self) -> &ArtifactType {
        &self.artifact_type
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn primary_stat(&self) -> &PrimaryStat {
        &self.primary_stat
    }

    /// Secondary stats in insertion order.
    pub fn secondary_stats(&self) -> &[SecondaryStat] {
        &self.secondary_stats
    }
}

/// Older snapshots encode an artifact without substats as `"Substats": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SecondaryStat>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SecondaryStat>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::PrimaryStatKind;
    use proptest::prelude::*;

    fn atk() -> PrimaryStat {
        PrimaryStat::new("ATK_PERCENT", 0.1).unwrap()
    }

    fn subs() -> Vec<SecondaryStat> {
        vec![
            SecondaryStat::new("CRIT_RATE", 3.9).unwrap(),
            SecondaryStat::new("CRIT_DMG", 7.8).unwrap(),
        ]
    }

    #[test]
    fn new_artifact_keeps_inputs() {
        let a = Artifact::new("a1", "Gladiator's Finale", "FLOWER", 20, atk(), subs()).unwrap();
        assert_eq!(a.id(), "a1");
        assert_eq!(a.set(), &ArtifactSet::GladiatorsFinale);
        assert_eq!(a.artifact_type(), &ArtifactType::Flower);
        assert_eq!(a.level(), 20);
        assert_eq!(a.primary_stat(), &atk());
        assert_eq!(a.secondary_stats(), subs().as_slice());
    }

    #[test]
    fn level_is_not_normalized() {
        let a = Artifact::new("neg", "Maiden Beloved", "SANDS", -5, atk(), vec![]).unwrap();
        assert_eq!(a.level(), -5);
    }

    #[test]
    fn empty_id_wins_over_other_errors() {
        let err = Artifact::new("", "nope", "nope", 0, atk(), vec![]).unwrap_err();
        assert_eq!(err, TypeError::InvalidArtifactId);
    }

    #[test]
    fn set_is_checked_before_type() {
        let err = Artifact::new("x", "nope", "nope", 0, atk(), vec![]).unwrap_err();
        assert_eq!(err, TypeError::InvalidArtifactSet("nope".into()));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = Artifact::new("x", "Noblesse Oblige", "RING", 0, atk(), vec![]).unwrap_err();
        assert_eq!(err, TypeError::InvalidArtifactType("RING".into()));
    }

    #[test]
    fn snapshot_record_shape() {
        let a = Artifact::new("a1", "Gladiator's Finale", "FLOWER", 0, atk(), vec![]).unwrap();
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ID": "a1",
                "ArtifactSet": "Gladiator's Finale",
                "Type": "FLOWER",
                "Level": 0,
                "PrimaryStat": {"Type": "ATK_PERCENT", "Value": 0.1},
                "Substats": []
            })
        );
    }

    #[test]
    fn null_substats_decode_as_empty() {
        let raw = r#"{"ID":"a","ArtifactSet":"Gladiator","Type":"PLUME","Level":4,
            "PrimaryStat":{"Type":"HP_PERCENT","Value":1.0},"Substats":null}"#;
        let a: Artifact = serde_json::from_str(raw).unwrap();
        assert!(a.secondary_stats().is_empty());
        assert!(a.validate().is_ok());
    }

    #[test]
    fn decoded_artifact_reports_unknown_values_on_validate() {
        let raw = r#"{"ID":"a","ArtifactSet":"Gladiator's Finale","Type":"FLOWER","Level":0,
            "PrimaryStat":{"Type":"SHIELD","Value":1.0},"Substats":[]}"#;
        let a: Artifact = serde_json::from_str(raw).unwrap();
        assert_eq!(a.primary_stat().kind(), &PrimaryStatKind::Unrecognized("SHIELD".into()));
        assert_eq!(a.validate(), Err(TypeError::InvalidPrimaryStatKind("SHIELD".into())));
    }

    #[test]
    fn decoded_artifact_reports_bad_substat() {
        let raw = r#"{"ID":"a","ArtifactSet":"Gladiator's Finale","Type":"FLOWER","Level":0,
            "PrimaryStat":{"Type":"HP_PERCENT","Value":1.0},
            "Substats":[{"Type":"CRIT_RATE","Value":2.0},{"Type":"HEALING_BONUS","Value":1.0}]}"#;
        let a: Artifact = serde_json::from_str(raw).unwrap();
        assert_eq!(
            a.validate(),
            Err(TypeError::InvalidSecondaryStatKind("HEALING_BONUS".into()))
        );
    }

    #[test]
    fn decoded_artifact_with_empty_id_fails_validate() {
        let raw = r#"{"ID":"","ArtifactSet":"Gladiator's Finale","Type":"FLOWER","Level":0,
            "PrimaryStat":{"Type":"HP_PERCENT","Value":1.0}}"#;
        let a: Artifact = serde_json::from_str(raw).unwrap();
        assert_eq!(a.validate(), Err(TypeError::InvalidArtifactId));
    }

    proptest! {
        #[test]
        fn any_known_set_and_type_builds(
            id in "[a-zA-Z0-9]{1,32}",
            set in prop::sample::select(ArtifactSet::ALL.to_vec()),
            slot in prop::sample::select(ArtifactType::ALL.to_vec()),
            level in any::<i64>(),
        ) {
            let a = Artifact::new(id.clone(), set.as_str(), slot.as_str(), level, atk(), subs())
                .unwrap();
            prop_assert_eq!(a.id(), id.as_str());
            prop_assert_eq!(a.set(), &set);
            prop_assert_eq!(a.artifact_type(), &slot);
            prop_assert_eq!(a.level(), level);
            prop_assert!(a.validate().is_ok());
        }

        #[test]
        fn unknown_type_always_reports_type_error(raw in "[a-z]{1,12}") {
            let err = Artifact::new("id", "Wanderer's Troupe", &raw, 0, atk(), vec![]).unwrap_err();
            prop_assert_eq!(err, TypeError::InvalidArtifactType(raw));
        }
    }
}
