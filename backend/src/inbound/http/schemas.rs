//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their domain counterparts for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or a booking was rejected.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested clinic does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Error payload with a machine-readable code and a human-readable message.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Selected slot is no longer available")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, such as the rejection code.
    #[schema(example = json!({"code": "slot_unavailable"}))]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::ServiceCategory`].
#[derive(ToSchema)]
#[schema(as = ServiceCategory)]
pub enum ServiceCategorySchema {
    /// Routine examinations.
    #[schema(rename = "checkup")]
    Checkup,
    /// Vaccines and boosters.
    #[schema(rename = "vaccination")]
    Vaccination,
    /// Procedures under anaesthetic.
    #[schema(rename = "surgery")]
    Surgery,
}

/// OpenAPI schema for [`crate::domain::AppointmentStatus`].
#[derive(ToSchema)]
#[schema(as = AppointmentStatus)]
pub enum AppointmentStatusSchema {
    /// The slot was consumed.
    #[schema(rename = "confirmed")]
    Confirmed,
}
