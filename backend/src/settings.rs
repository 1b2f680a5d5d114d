//! Server configuration loaded via OrthoConfig.
//!
//! Values are layered from defaults, a configuration file, `CLINIC_*`
//! environment variables, and command-line flags.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Settings controlling the HTTP listener and registry seeding.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CLINIC")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// JSON seed file replacing the built-in clinics.
    pub seed_path: Option<PathBuf>,
}

/// Raised when the configured host and port do not form a socket address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bind address {address}: {message}")]
pub struct BindAddressError {
    /// The `host:port` string that failed to parse.
    pub address: String,
    /// Parser diagnostic.
    pub message: String,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Combine host and port into a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, BindAddressError> {
        let address = format!("{}:{}", self.host(), self.port());
        address.parse().map_err(|err: std::net::AddrParseError| BindAddressError {
            message: err.to_string(),
            address,
        })
    }

    /// Return the seed file override, if any.
    #[must_use]
    pub const fn seed_path(&self) -> Option<&PathBuf> {
        self.seed_path.as_ref()
    }
}
