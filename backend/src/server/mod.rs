//! HTTP server assembly.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use clinic_backend::Trace;
use clinic_backend::inbound::http::appointments::book_appointment;
use clinic_backend::inbound::http::health::{HealthState, live, ready};
use clinic_backend::inbound::http::services::list_services;
use clinic_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use clinic_backend::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::build_http_state;

fn configure_routes(
    health: web::Data<HealthState>,
    http: web::Data<HttpState>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |routes| {
        routes
            .app_data(health)
            .app_data(http)
            .service(list_services)
            .service(book_appointment)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        routes.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }
}

/// Bind the clinic API described by `config`.
///
/// Readiness flips once the listener is bound.
///
/// # Errors
/// Returns the I/O error raised when the socket cannot be bound.
pub fn create_server(
    health: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http = build_http_state(&config);
    let worker_health = health.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Trace)
            .configure(configure_routes(worker_health.clone(), http.clone()))
    })
    .bind(config.bind_addr)?
    .run();

    health.mark_ready();
    Ok(server)
}
