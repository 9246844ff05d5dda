//! Entity model for the artifact catalog.
//!
//! Every other `adb-*` crate depends on `adb-types`. The types here are the
//! only way to build an [`Artifact`]; raw transport strings are converted
//! through one strict parser per enumeration before they reach an entity.
//!
//! # Key Types
//!
//! - [`Artifact`]: validated aggregate of id, set, slot, level, and stats
//! - [`ArtifactSet`]: the named set an artifact belongs to
//! - [`ArtifactType`]: the equipment slot (flower, plume, sands, goblet, circlet)
//! - [`PrimaryStat`] / [`SecondaryStat`]: (kind, value) pairs over two closed kind sets
//!
//! # Unrecognized values
//!
//! Each enumeration has an `Unrecognized` variant that is only produced by
//! the lenient `From<String>` conversion used when decoding snapshots. Strict
//! parsing (`FromStr`) and the [`Artifact::new`] constructor reject it, and
//! [`Artifact::validate`] reports it for entities that were decoded rather
//! than constructed.

pub mod artifact;
pub mod error;
pub mod set;
pub mod slot;
pub mod stat;

pub use artifact::Artifact;
pub use error::{TypeError, TypeResult};
pub use set::ArtifactSet;
pub use slot::ArtifactType;
pub use stat::{PrimaryStat, PrimaryStatKind, SecondaryStat, SecondaryStatKind};
