use std::sync::Arc;

use adb_service::{ArtifactReadService, ArtifactWriteService, IdGenerator};
use adb_store::{InMemoryArtifactStore, StoreResult};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub read: ArtifactReadService,
    pub write: ArtifactWriteService,
    store: Arc<InMemoryArtifactStore>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryArtifactStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            read: ArtifactReadService::new(store.clone()),
            write: ArtifactWriteService::new(store.clone(), ids),
            store,
        }
    }

    pub fn artifact_count(&self) -> StoreResult<usize> {
        self.store.len()
    }
}
