//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use clinic_backend::domain::ClinicRegistry;
use clinic_backend::domain::ports::AppointmentIdGenerator;

/// Everything needed to build and bind the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) registry: Arc<ClinicRegistry>,
    pub(crate) ids: Arc<dyn AppointmentIdGenerator>,
}

impl ServerConfig {
    /// Construct a configuration serving `registry` on `bind_addr`.
    #[must_use]
    pub const fn new(
        bind_addr: SocketAddr,
        registry: Arc<ClinicRegistry>,
        ids: Arc<dyn AppointmentIdGenerator>,
    ) -> Self {
        Self {
            bind_addr,
            registry,
            ids,
        }
    }
}
