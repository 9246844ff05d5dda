//! HTTP server for the artifact catalog.
//!
//! Routes requests to the catalog services, maps service errors to status
//! codes, and owns the snapshot lifecycle: load at startup, save after a
//! graceful shutdown.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::{ServerConfig, DEFAULT_CONFIG_PATH};
pub use error::{ApiError, ServerError, ServerResult};
pub use server::{shutdown_signal, ArtifactServer};
pub use state::AppState;
