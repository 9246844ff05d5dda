use adb_types::Artifact;
use serde::{Deserialize, Serialize};

/// Transport form of a stat: `{"Type": ..., "Value": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatView {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

/// Flat transport record for one artifact.
///
/// Serialized as `{Set, Type, Level, PrimaryStat, SubStat}` with the
/// secondary stats in their stored order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtifactView {
    #[serde(rename = "Set")]
    pub set: String,
    #[serde(rename = "Type")]
    pub artifact_type: String,
    #[serde(rename = "Level")]
    pub level: i64,
    #[serde(rename = "PrimaryStat")]
    pub primary_stat: StatView,
    #[serde(rename = "SubStat")]
    pub sub_stats: Vec<StatView>,
}

impl From<&Artifact> for ArtifactView {
    fn from(artifact: &Artifact) -> Self {
        let primary = artifact.primary_stat();
        Self {
            set: artifact.set().to_string(),
            artifact_type: artifact.artifact_type().to_string(),
            level: artifact.level(),
            primary_stat: StatView {
                kind: primary.kind().to_string(),
                value: primary.value(),
            },
            sub_stats: artifact
                .secondary_stats()
                .iter()
                .map(|s| StatView {
                    kind: s.kind().to_string(),
                    value: s.value(),
                })
                .collect(),
        }
    }
}
