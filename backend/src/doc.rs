//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers that describe domain types without coupling them
//! to utoipa. The document backs Swagger UI in debug builds and is exported
//! via `cargo run --bin openapi-dump`.

use crate::inbound::http::appointments::{AppointmentRequestBody, AppointmentResponse};
use crate::inbound::http::schemas::{
    AppointmentStatusSchema, ErrorCodeSchema, ErrorSchema, ServiceCategorySchema,
};
use crate::inbound::http::services::{ServiceResponse, ServicesResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinic scheduling API",
        description = "Browse clinic services and book appointments into open slots."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::services::list_services,
        crate::inbound::http::appointments::book_appointment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ServiceCategorySchema,
        AppointmentStatusSchema,
        ServicesResponse,
        ServiceResponse,
        AppointmentRequestBody,
        AppointmentResponse,
    )),
    tags(
        (name = "services", description = "Clinic catalogue lookups"),
        (name = "appointments", description = "Slot booking"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
