use thiserror::Error;

/// Validation failures raised while building entities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("artifact ID cannot be empty")]
    InvalidArtifactId,

    #[error("invalid artifact set: {0}")]
    InvalidArtifactSet(String),

    #[error("invalid artifact type: {0}")]
    InvalidArtifactType(String),

    #[error("invalid primary stat kind: {0}")]
    InvalidPrimaryStatKind(String),

    #[error("invalid secondary stat kind: {0}")]
    InvalidSecondaryStatKind(String),
}

pub type TypeResult<T> = Result<T, TypeError>;
