use adb_types::{Artifact, ArtifactSet, ArtifactType};

use crate::error::StoreResult;

/// Read access to stored artifacts.
///
/// Every method returns owned copies. Filters fail with
/// [`StoreError::NotFound`](crate::StoreError::NotFound) when nothing
/// matches; the order of returned artifacts is unspecified.
pub trait ArtifactGetter: Send + Sync {
    /// Look up one artifact.
    ///
    /// Returns `InvalidId` for an empty id and `NotFound` if absent.
    fn get_by_id(&self, id: &str) -> StoreResult<Artifact>;

    fn get_by_type(&self, artifact_type: &ArtifactType) -> StoreResult<Vec<Artifact>>;

    fn get_by_set(&self, set: &ArtifactSet) -> StoreResult<Vec<Artifact>>;

    /// Artifacts matching both the type and the set.
    fn get_by_type_and_set(
        &self,
        artifact_type: &ArtifactType,
        set: &ArtifactSet,
    ) -> StoreResult<Vec<Artifact>>;
}

/// Insert-only creation.
pub trait ArtifactSaver: Send + Sync {
    /// Store a new artifact.
    ///
    /// Fails with `ArtifactIdIsEmpty` for an empty id and `AlreadyExists`
    /// if the id is taken; the existing entry is left untouched.
    fn save(&self, artifact: Artifact) -> StoreResult<()>;
}

/// Removal by id.
pub trait ArtifactDeleter: Send + Sync {
    /// Fails with `ArtifactIdIsEmpty` for an empty id and `NotFound` if absent.
    fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}
