//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags (`--host`, `--port`, `--database-url`, ...),
//! `TODO_`-prefixed environment variables and an optional configuration file,
//! in OrthoConfig's usual precedence order. Every field has a default, so the
//! server starts with no configuration at all.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values for the todo server process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO")]
pub struct TodoSettings {
    /// Interface to bind the HTTP listener to.
    #[ortho_config(default = String::from("0.0.0.0"))]
    pub host: String,
    /// TCP port for the HTTP listener.
    #[ortho_config(default = 8000)]
    pub port: u16,
    /// Path of the SQLite database file.
    #[ortho_config(default = String::from("todo.db"))]
    pub database_url: String,
    /// Upper bound on pooled SQLite connections.
    #[ortho_config(default = 8)]
    pub pool_max_size: u32,
    /// Connections the pool keeps open while idle.
    #[ortho_config(default = 1)]
    pub pool_min_idle: u32,
    /// Seconds to wait for a pooled connection before failing the request.
    #[ortho_config(default = 30)]
    pub pool_timeout_secs: u64,
    /// Comma-separated origins allowed to call the API from a browser.
    /// Unset means any origin.
    pub cors_origins: Option<String>,
}

impl TodoSettings {
    /// Connection checkout timeout for the pool.
    pub fn pool_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_timeout_secs)
    }

    /// Split the configured CORS origins, dropping blank entries.
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolve host and port to the first matching socket address.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the host cannot be resolved.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("no address found for host {}", self.host),
                )
            })
    }
}
