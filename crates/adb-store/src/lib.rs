//! Keyed storage for catalog artifacts.
//!
//! The store is an id → [`Artifact`] map owned by a single value that is
//! constructed at startup and shared by reference. Its whole contents can be
//! written to and read from a JSON snapshot file.
//!
//! # Capabilities
//!
//! Access is split into narrow traits so that readers cannot mutate:
//!
//! - [`ArtifactGetter`] -- lookup by id and filtering by type and/or set
//! - [`ArtifactSaver`] -- insert-only creation
//! - [`ArtifactDeleter`] -- removal by id
//!
//! [`InMemoryArtifactStore`] implements all three.
//!
//! # Design Rules
//!
//! 1. Entries are never modified in place; an update is a delete followed by a save.
//! 2. A save never overwrites: an existing id is a conflict.
//! 3. "No match" is an error ([`StoreError::NotFound`]), not an empty success.
//! 4. Queries hand out owned copies, never references into the map.
//! 5. Snapshot I/O errors are propagated, never retried.
//!
//! [`Artifact`]: adb_types::Artifact

pub mod error;
pub mod memory;
pub mod snapshot;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryArtifactStore;
pub use snapshot::{load_snapshot, save_snapshot, EntryError, Snapshot};
pub use traits::{ArtifactDeleter, ArtifactGetter, ArtifactSaver};
