use std::sync::Arc;

use adb_store::ArtifactGetter;
use adb_types::{Artifact, ArtifactSet, ArtifactType};

use crate::error::ServiceResult;
use crate::view::ArtifactView;

/// Read side of the catalog.
#[derive(Clone)]
pub struct ArtifactReadService {
    getter: Arc<dyn ArtifactGetter>,
}

impl ArtifactReadService {
    pub fn new(getter: Arc<dyn ArtifactGetter>) -> Self {
        Self { getter }
    }

    pub fn get_artifact(&self, id: &str) -> ServiceResult<ArtifactView> {
        let artifact = self.getter.get_by_id(id)?;
        Ok(ArtifactView::from(&artifact))
    }

    pub fn get_artifacts_by_type(
        &self,
        artifact_type: &ArtifactType,
    ) -> ServiceResult<Vec<ArtifactView>> {
        Ok(project(self.getter.get_by_type(artifact_type)?))
    }

    pub fn get_artifacts_by_set(&self, set: &ArtifactSet) -> ServiceResult<Vec<ArtifactView>> {
        Ok(project(self.getter.get_by_set(set)?))
    }

    pub fn get_artifacts_by_type_and_set(
        &self,
        artifact_type: &ArtifactType,
        set: &ArtifactSet,
    ) -> ServiceResult<Vec<ArtifactView>> {
        Ok(project(self.getter.get_by_type_and_set(artifact_type, set)?))
    }
}

fn project(artifacts: Vec<Artifact>) -> Vec<ArtifactView> {
    artifacts.iter().map(ArtifactView::from).collect()
}
