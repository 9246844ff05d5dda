use std::future::Future;
use std::sync::Arc;

use adb_service::RandomIdGenerator;
use adb_store::{load_snapshot, save_snapshot, InMemoryArtifactStore};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Artifact catalog server: owns the store for the lifetime of the process.
pub struct ArtifactServer {
    config: ServerConfig,
    store: Arc<InMemoryArtifactStore>,
}

impl ArtifactServer {
    /// Load the configured snapshot and build a server around it.
    ///
    /// A missing snapshot starts an empty store; any other load failure
    /// (permissions, corrupt file) is returned.
    pub fn open(config: ServerConfig) -> ServerResult<Self> {
        let store = match load_snapshot(&config.data_file) {
            Ok(store) => store,
            Err(e) if e.is_missing_file() => {
                warn!(path = %config.data_file.display(), "no snapshot found; starting empty");
                InMemoryArtifactStore::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self::with_store(config, Arc::new(store)))
    }

    pub fn with_store(config: ServerConfig, store: Arc<InMemoryArtifactStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<InMemoryArtifactStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.store.clone(), Arc::new(RandomIdGenerator)))
    }

    /// Write the store to the configured snapshot file.
    pub fn persist(&self) -> ServerResult<()> {
        save_snapshot(&self.store, &self.config.data_file)?;
        Ok(())
    }

    /// Bind the configured address and serve until SIGINT or SIGTERM.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.run(listener, shutdown_signal()).await
    }

    /// Serve on `listener` until `signal` resolves, then persist.
    ///
    /// In-flight requests get `shutdown_timeout` to finish. Connections still
    /// open after that are not waited for, so the store is closed before the
    /// snapshot is taken: any write they attempt later is refused with 503
    /// instead of being acknowledged and lost.
    ///
    /// The snapshot is written even if serving failed; a failed write is
    /// returned so the process does not report a clean exit.
    pub async fn run<F>(self, listener: TcpListener, signal: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(addr = ?listener.local_addr().ok(), "artifact-db listening");

        let stop = Arc::new(Notify::new());
        let stopped = stop.clone();
        let server = axum::serve(listener, self.router())
            .with_graceful_shutdown(async move { stopped.notified().await });
        let mut handle = tokio::spawn(async move { server.await });

        let outcome = tokio::select! {
            joined = &mut handle => flatten(joined),
            _ = signal => {
                info!("shutdown signal received; draining requests");
                stop.notify_one();
                match tokio::time::timeout(self.config.shutdown_timeout(), &mut handle).await {
                    Ok(joined) => flatten(joined),
                    Err(_) => {
                        warn!(
                            timeout = ?self.config.shutdown_timeout(),
                            "drain timed out; refusing further writes"
                        );
                        handle.abort();
                        Ok(())
                    }
                }
            }
        };

        self.store.close()?;
        self.persist()?;
        info!("server stopped");
        outcome
    }
}

fn flatten(joined: Result<std::io::Result<()>, tokio::task::JoinError>) -> ServerResult<()> {
    match joined {
        Ok(result) => result.map_err(ServerError::from),
        Err(e) => Err(ServerError::Internal(e.to_string())),
    }
}

/// Resolves on Ctrl-C, or on SIGTERM where available.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
