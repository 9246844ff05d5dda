//! Catalog services: the operations the HTTP layer calls.
//!
//! - [`ArtifactReadService`] projects stored artifacts into [`ArtifactView`]s.
//!   It only holds an [`ArtifactGetter`](adb_store::ArtifactGetter), so it
//!   cannot mutate the store.
//! - [`ArtifactWriteService`] validates a [`CreateArtifactCommand`], mints an
//!   id through an injected [`IdGenerator`], and saves the result.

pub mod error;
pub mod id;
pub mod read;
pub mod view;
pub mod write;

pub use error::{ServiceError, ServiceResult};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use read::ArtifactReadService;
pub use view::{ArtifactView, StatView};
pub use write::{ArtifactWriteService, CreateArtifactCommand, StatCommand};
