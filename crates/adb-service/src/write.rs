use std::sync::Arc;

use adb_store::{ArtifactDeleter, ArtifactSaver};
use adb_types::{Artifact, PrimaryStat, SecondaryStat, TypeResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ServiceResult;
use crate::id::IdGenerator;

/// Raw `(kind, value)` pair as received from a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatCommand {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

/// Request to register a new artifact. Every field is still unchecked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateArtifactCommand {
    #[serde(rename = "ArtifactSet")]
    pub set: String,
    #[serde(rename = "Type")]
    pub artifact_type: String,
    #[serde(rename = "Level")]
    pub level: i64,
    #[serde(rename = "PrimaryStat")]
    pub primary_stat: StatCommand,
    #[serde(rename = "Substats", default)]
    pub sub_stats: Vec<StatCommand>,
}

/// Write side of the catalog.
#[derive(Clone)]
pub struct ArtifactWriteService {
    saver: Arc<dyn ArtifactSaver>,
    deleter: Arc<dyn ArtifactDeleter>,
    ids: Arc<dyn IdGenerator>,
}

impl ArtifactWriteService {
    pub fn new<S>(store: Arc<S>, ids: Arc<dyn IdGenerator>) -> Self
    where
        S: ArtifactSaver + ArtifactDeleter + 'static,
    {
        let saver: Arc<dyn ArtifactSaver> = store.clone();
        let deleter: Arc<dyn ArtifactDeleter> = store;
        Self { saver, deleter, ids }
    }

    /// Validate `command`, mint an id, and store the artifact.
    ///
    /// Returns the new id. Nothing is stored unless every check passes; an
    /// id collision surfaces as a conflict instead of overwriting.
    pub fn create_artifact(&self, command: CreateArtifactCommand) -> ServiceResult<String> {
        let primary = PrimaryStat::new(&command.primary_stat.kind, command.primary_stat.value)?;
        let secondaries = command
            .sub_stats
            .iter()
            .map(|s| SecondaryStat::new(&s.kind, s.value))
            .collect::<TypeResult<Vec<_>>>()?;

        let id = self.ids.generate();
        let artifact = Artifact::new(
            id.clone(),
            &command.set,
            &command.artifact_type,
            command.level,
            primary,
            secondaries,
        )?;
        self.saver.save(artifact)?;

        info!(
            id = %id,
            set = %command.set,
            artifact_type = %command.artifact_type,
            "artifact created"
        );
        Ok(id)
    }

    pub fn delete_artifact(&self, id: &str) -> ServiceResult<()> {
        self.deleter.delete_by_id(id)?;
        info!(id, "artifact deleted");
        Ok(())
    }
}
