use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use adb_types::{Artifact, ArtifactSet, ArtifactType};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::snapshot::Snapshot;
use crate::traits::{ArtifactDeleter, ArtifactGetter, ArtifactSaver};

/// HashMap-backed artifact store.
///
/// A single `RwLock` guards the map for the duration of each operation.
/// Queries clone the matching artifacts out of the map.
///
/// Once [`close`](Self::close) returns, every save and delete fails with
/// [`StoreError::Closed`]; reads keep working.
pub struct InMemoryArtifactStore {
    artifacts: RwLock<HashMap<String, Artifact>>,
    // Only flipped while the write lock is held.
    closed: AtomicBool,
}

impl InMemoryArtifactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            artifacts: RwLock::new(HashMap::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// Create a store from the contents of `snapshot`, keyed by each
    /// artifact's own id.
    ///
    /// See [`Snapshot::into_keyed`] for how mismatched keys are handled.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            artifacts: RwLock::new(snapshot.into_keyed()),
            closed: AtomicBool::new(false),
        }
    }

    /// Number of stored artifacts.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// All stored ids, sorted.
    pub fn ids(&self) -> StoreResult<Vec<String>> {
        let mut ids: Vec<String> = self.read()?.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    /// Owned copy of the whole map.
    pub fn snapshot(&self) -> StoreResult<Snapshot> {
        let map = self.read()?;
        Ok(Snapshot {
            artifacts: map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        })
    }

    /// Swap in the contents of `snapshot`, discarding everything stored now.
    pub fn replace(&self, snapshot: Snapshot) -> StoreResult<()> {
        let mut map = self.write()?;
        *map = snapshot.into_keyed();
        debug!(count = map.len(), "store contents replaced");
        Ok(())
    }

    /// Stop accepting writes.
    ///
    /// Waits for any in-progress save or delete to finish, so a snapshot
    /// taken afterwards is final.
    pub fn close(&self) -> StoreResult<()> {
        let _map = self.write()?;
        self.closed.store(true, Ordering::SeqCst);
        debug!("store closed for writes");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Write guard for a mutation; fails once the store is closed.
    fn write_open(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, Artifact>>> {
        let map = self.write()?;
        if self.is_closed() {
            return Err(StoreError::Closed);
        }
        Ok(map)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<String, Artifact>>> {
        self.artifacts
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<String, Artifact>>> {
        self.artifacts
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    /// Linear scan; `NotFound` carries `query` when nothing matches.
    fn filter<F>(&self, query: String, matches: F) -> StoreResult<Vec<Artifact>>
    where
        F: Fn(&Artifact) -> bool,
    {
        let found: Vec<Artifact> = self
            .read()?
            .values()
            .filter(|a| matches(a))
            .cloned()
            .collect();
        if found.is_empty() {
            return Err(StoreError::NotFound(query));
        }
        Ok(found)
    }
}

impl Default for InMemoryArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactGetter for InMemoryArtifactStore {
    fn get_by_id(&self, id: &str) -> StoreResult<Artifact> {
        if id.is_empty() {
            return Err(StoreError::InvalidId);
        }
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("id={id}")))
    }

    fn get_by_type(&self, artifact_type: &ArtifactType) -> StoreResult<Vec<Artifact>> {
        self.filter(format!("type={artifact_type}"), |a| {
            a.artifact_type() == artifact_type
        })
    }

    fn get_by_set(&self, set: &ArtifactSet) -> StoreResult<Vec<Artifact>> {
        self.filter(format!("set={set}"), |a| a.set() == set)
    }

    fn get_by_type_and_set(
        &self,
        artifact_type: &ArtifactType,
        set: &ArtifactSet,
    ) -> StoreResult<Vec<Artifact>> {
        self.filter(format!("type={artifact_type}, set={set}"), |a| {
            a.artifact_type() == artifact_type && a.set() == set
        })
    }
}

impl ArtifactSaver for InMemoryArtifactStore {
    fn save(&self, artifact: Artifact) -> StoreResult<()> {
        if artifact.id().is_empty() {
            return Err(StoreError::ArtifactIdIsEmpty);
        }
        let mut map = self.write_open()?;
        if map.contains_key(artifact.id()) {
            return Err(StoreError::AlreadyExists(artifact.id().to_string()));
        }
        debug!(id = artifact.id(), "artifact saved");
        map.insert(artifact.id().to_string(), artifact);
        Ok(())
    }
}

impl ArtifactDeleter for InMemoryArtifactStore {
    fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        if id.is_empty() {
            return Err(StoreError::ArtifactIdIsEmpty);
        }
        let mut map = self.write_open()?;
        match map.remove(id) {
            Some(_) => {
                debug!(id, "artifact deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("id={id}"))),
        }
    }
}

impl std::fmt::Debug for InMemoryArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.artifacts.read().map(|m| m.len()).ok();
        f.debug_struct("InMemoryArtifactStore")
            .field("artifact_count", &count)
            .field("closed", &self.is_closed())
            .finish()
    }
}
