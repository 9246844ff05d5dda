use adb_store::StoreError;
use adb_types::TypeError;
use thiserror::Error;

/// Outcome classes the HTTP layer maps to status codes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed caller input (400).
    #[error(transparent)]
    Validation(#[from] TypeError),

    /// An empty id or similar contract violation (400).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No artifact matched (404).
    #[error("{0}")]
    NotFound(String),

    /// The id is already taken (409).
    #[error("{0}")]
    Conflict(String),

    /// The store stopped accepting writes for shutdown (503).
    #[error("{0}")]
    Unavailable(String),

    /// Anything else (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound(err.to_string()),
            StoreError::AlreadyExists(_) => Self::Conflict(err.to_string()),
            StoreError::InvalidId | StoreError::ArtifactIdIsEmpty => {
                Self::InvalidArgument(err.to_string())
            }
            StoreError::Closed => Self::Unavailable(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_classes() {
        assert!(matches!(
            ServiceError::from(StoreError::NotFound("id=x".into())),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            ServiceError::from(StoreError::AlreadyExists("x".into())),
            ServiceError::Conflict(_)
        ));
        assert!(matches!(
            ServiceError::from(StoreError::InvalidId),
            ServiceError::InvalidArgument(_)
        ));
        assert!(matches!(
            ServiceError::from(StoreError::Closed),
            ServiceError::Unavailable(_)
        ));
        assert!(matches!(
            ServiceError::from(StoreError::LockPoisoned("boom".into())),
            ServiceError::Internal(_)
        ));
    }

    #[test]
    fn validation_message_is_verbatim() {
        let err = ServiceError::from(TypeError::InvalidArtifactType("RING".into()));
        assert_eq!(err.to_string(), "invalid artifact type: RING");
    }
}
