use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Where the binary looks for its config file when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/artifact-db/config.toml";
pub const DEFAULT_DATA_FILE: &str = "/var/lib/artifact-db/artifacts.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Snapshot file loaded at startup and written at shutdown.
    pub data_file: PathBuf,
    /// Upper bound on draining in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            shutdown_timeout_secs: 5,
        }
    }
}

impl ServerConfig {
    /// Read a TOML config file.
    ///
    /// A missing file yields the defaults, as do keys absent from the file.
    /// An empty `data_file` is treated as absent.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let mut config: Self = toml::from_str(&raw)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        if config.data_file.as_os_str().is_empty() {
            config.data_file = PathBuf::from(DEFAULT_DATA_FILE);
        }
        Ok(config)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(c.shutdown_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "bind_addr = \"127.0.0.1:9090\"\ndata_file = \"/custom/path/data.json\"\nshutdown_timeout_secs = 1\n",
        )
        .unwrap();

        let c = ServerConfig::load(&path).unwrap();
        assert_eq!(c.bind_addr, "127.0.0.1:9090".parse::<SocketAddr>().unwrap());
        assert_eq!(c.data_file, PathBuf::from("/custom/path/data.json"));
        assert_eq!(c.shutdown_timeout_secs, 1);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let c = ServerConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(c, ServerConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "bind_addr = \"127.0.0.1:7000\"\ndata_file = \"\"\n").unwrap();

        let c = ServerConfig::load(&path).unwrap();
        assert_eq!(c.bind_addr.port(), 7000);
        assert_eq!(c.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "bind_addr = [unterminated").unwrap();
        assert!(matches!(ServerConfig::load(&path), Err(ServerError::Config(_))));
    }
}
