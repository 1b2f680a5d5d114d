//! Backend entry-point: loads settings, seeds the registry, and serves HTTP.

mod server;

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use clinic_backend::inbound::http::health::HealthState;
use clinic_backend::outbound::UuidAppointmentIds;
use clinic_backend::settings::ServerSettings;
use clinic_backend::startup::load_clinic_registry;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let registry = load_clinic_registry(&settings).map_err(std::io::Error::other)?;

    let config = ServerConfig::new(
        bind_addr,
        Arc::new(registry),
        Arc::new(UuidAppointmentIds::new()),
    );
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "clinic backend listening");
    server.await
}
