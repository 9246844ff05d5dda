use std::io;

/// Errors from store operations and the snapshot codec.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No artifact matched the query.
    #[error("artifact not found: {0}")]
    NotFound(String),

    /// A lookup was attempted with an empty id.
    #[error("invalid artifact ID: empty")]
    InvalidId,

    /// A save or delete was attempted with an empty id.
    #[error("artifact ID is empty")]
    ArtifactIdIsEmpty,

    /// An artifact with this id is already stored.
    #[error("artifact already exists: {0}")]
    AlreadyExists(String),

    /// The store could not be encoded as a snapshot.
    #[error("snapshot encode error: {0}")]
    Encode(String),

    /// The snapshot file is not a valid snapshot document.
    #[error("snapshot decode error: {0}")]
    Decode(String),

    /// I/O error reading or writing a snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    /// The store was closed for shutdown and no longer accepts writes.
    #[error("store is closed for writes")]
    Closed,
}

impl StoreError {
    /// `true` when a snapshot load failed only because the file is absent.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
