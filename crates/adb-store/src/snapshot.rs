//! JSON snapshot of the whole store.
//!
//! On-disk format:
//! ```text
//! {
//!   "artifacts": {
//!     "<id>": {"ID": ..., "ArtifactSet": ..., "Type": ..., "Level": ...,
//!              "PrimaryStat": {"Type": ..., "Value": ...},
//!              "Substats": [{"Type": ..., "Value": ...}, ...]}
//!   }
//! }
//! ```
//!
//! Loading does not validate entries: values outside the enumerations are
//! kept verbatim and written back unchanged. Entries that would fail
//! [`Artifact::validate`], or whose map key differs from their `ID`, are
//! logged so an operator can spot them.
//!
//! Stat values must be finite. JSON has no spelling for NaN or infinity, so
//! a snapshot holding one is refused at write time instead of producing a
//! file that cannot be read back.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::Path;

use adb_types::{Artifact, TypeError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::memory::InMemoryArtifactStore;

/// Why a decoded snapshot entry is suspect.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EntryError {
    #[error(transparent)]
    Invalid(#[from] TypeError),

    /// The map key is not the artifact's own id.
    #[error("snapshot key {key:?} does not match artifact ID {id:?}")]
    KeyMismatch { key: String, id: String },
}

/// Full image of the store's contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub artifacts: BTreeMap<String, Artifact>,
}

impl Snapshot {
    /// Decode a snapshot file.
    ///
    /// A missing file surfaces as an I/O error for which
    /// [`StoreError::is_missing_file`] is `true`.
    pub fn read(path: &Path) -> StoreResult<Self> {
        let data = fs::read(path)?;
        let snapshot: Self =
            serde_json::from_slice(&data).map_err(|e| StoreError::Decode(e.to_string()))?;
        debug!(path = %path.display(), count = snapshot.artifacts.len(), "snapshot decoded");
        Ok(snapshot)
    }

    /// Write the snapshot so that `path` holds either the old or the new
    /// contents, never a partial file.
    ///
    /// Data goes to a temporary file next to `path`, is synced, and is then
    /// renamed over the destination.
    ///
    /// Fails with [`StoreError::Encode`] before touching the file if any
    /// stat value is NaN or infinite.
    pub fn write(&self, path: &Path) -> StoreResult<()> {
        self.check_finite()?;
        let json =
            serde_json::to_vec_pretty(self).map_err(|e| StoreError::Encode(e.to_string()))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;

        debug!(path = %path.display(), bytes = json.len(), "snapshot written");
        Ok(())
    }

    fn check_finite(&self) -> StoreResult<()> {
        for (key, artifact) in &self.artifacts {
            let primary = artifact.primary_stat();
            if !primary.value().is_finite() {
                return Err(StoreError::Encode(format!(
                    "artifact {key}: {} value {} is not finite",
                    primary.kind(),
                    primary.value()
                )));
            }
            if let Some(stat) = artifact
                .secondary_stats()
                .iter()
                .find(|s| !s.value().is_finite())
            {
                return Err(StoreError::Encode(format!(
                    "artifact {key}: {} value {} is not finite",
                    stat.kind(),
                    stat.value()
                )));
            }
        }
        Ok(())
    }

    /// Entries that decoded but would not pass entity validation, or that
    /// are filed under a key other than their own id.
    pub fn invalid_entries(&self) -> Vec<(&str, EntryError)> {
        self.artifacts
            .iter()
            .filter_map(|(key, artifact)| {
                let err = if key != artifact.id() {
                    EntryError::KeyMismatch {
                        key: key.clone(),
                        id: artifact.id().to_string(),
                    }
                } else {
                    EntryError::from(artifact.validate().err()?)
                };
                Some((key.as_str(), err))
            })
            .collect()
    }

    /// Re-key every entry by its own id.
    ///
    /// Entries already filed under their id win. A mismatched entry moves to
    /// its id unless that id is empty or taken, in which case it is dropped
    /// with a warning.
    pub fn into_keyed(self) -> HashMap<String, Artifact> {
        let (matching, moved): (Vec<_>, Vec<_>) = self
            .artifacts
            .into_iter()
            .partition(|(key, artifact)| key == artifact.id());

        let mut map: HashMap<String, Artifact> = matching.into_iter().collect();
        for (key, artifact) in moved {
            let id = artifact.id().to_string();
            if id.is_empty() || map.contains_key(&id) {
                warn!(key = %key, id = %id, "dropping snapshot entry filed under the wrong key");
                continue;
            }
            warn!(key = %key, id = %id, "snapshot entry re-keyed by its ID");
            map.insert(id, artifact);
        }
        map
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Build a store from the snapshot at `path`.
pub fn load_snapshot(path: &Path) -> StoreResult<InMemoryArtifactStore> {
    let snapshot = Snapshot::read(path)?;
    for (id, err) in snapshot.invalid_entries() {
        warn!(key = id, error = %err, "suspect snapshot entry");
    }
    info!(path = %path.display(), count = snapshot.len(), "snapshot loaded");
    Ok(InMemoryArtifactStore::from_snapshot(snapshot))
}

/// Persist the full contents of `store` to `path`.
pub fn save_snapshot(store: &InMemoryArtifactStore, path: &Path) -> StoreResult<()> {
    let snapshot = store.snapshot()?;
    snapshot.write(path)?;
    info!(path = %path.display(), count = snapshot.len(), "snapshot saved");
    Ok(())
}
