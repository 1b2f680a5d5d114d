//! Appointment booking endpoint.
//!
//! ```text
//! POST /appointments
//! ```
//!
//! The body is read as raw bytes and decoded by hand so that malformed JSON,
//! non-object payloads, and missing fields each get their own message.

use actix_web::{HttpResponse, post, web};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{AppointmentStatus, BookingConfirmation, BookingRequest, CustomerDetails, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AppointmentStatusSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_json_error, invalid_payload_error, missing_fields_error, required_string,
};

const CLINIC_ID: FieldName = FieldName::new("clinicId");
const SERVICE_ID: FieldName = FieldName::new("serviceId");
const PET_NAME: FieldName = FieldName::new("petName");
const OWNER_NAME: FieldName = FieldName::new("ownerName");
const OWNER_PHONE: FieldName = FieldName::new("ownerPhone");
const SLOT: FieldName = FieldName::new("slot");

const REQUIRED_FIELDS: [FieldName; 6] =
    [CLINIC_ID, SERVICE_ID, PET_NAME, OWNER_NAME, OWNER_PHONE, SLOT];

/// Request body for booking an appointment, for OpenAPI only. The handler
/// decodes the raw bytes itself. Every field must be a non-blank string;
/// values are trimmed before use.
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct AppointmentRequestBody {
    /// Clinic offering the service.
    #[schema(example = "clinic_abc")]
    pub clinic_id: String,
    /// Service to book.
    #[schema(example = "svc_1")]
    pub service_id: String,
    /// Name of the animal being seen.
    #[schema(example = "Biscuit")]
    pub pet_name: String,
    /// Name of the person booking.
    #[schema(example = "Jo Bloggs")]
    pub owner_name: String,
    /// Contact number for the owner.
    #[schema(example = "+44 7700 900000")]
    pub owner_phone: String,
    /// Slot label to consume.
    #[schema(example = "09:00")]
    pub slot: String,
}

/// Response payload for a confirmed appointment.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    /// Identifier minted for the booking.
    #[schema(example = "apt_3f2a9c1d")]
    pub appointment_id: String,
    /// Always `confirmed`.
    #[schema(value_type = AppointmentStatusSchema)]
    pub status: AppointmentStatus,
}

impl From<BookingConfirmation> for AppointmentResponse {
    fn from(confirmation: BookingConfirmation) -> Self {
        Self {
            appointment_id: confirmation.appointment_id.to_string(),
            status: confirmation.status,
        }
    }
}

fn parse_booking(body: &[u8]) -> Result<BookingRequest, Error> {
    let value: Value = serde_json::from_slice(body).map_err(|_| invalid_json_error())?;
    let Value::Object(fields) = value else {
        return Err(invalid_payload_error());
    };

    let missing: Vec<FieldName> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| required_string(&fields, *field).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(missing_fields_error(&missing));
    }

    let take =
        |field| required_string(&fields, field).ok_or_else(|| missing_fields_error(&[field]));
    Ok(BookingRequest {
        clinic_id: take(CLINIC_ID)?,
        service_id: take(SERVICE_ID)?,
        slot: take(SLOT)?,
        customer: CustomerDetails {
            pet_name: take(PET_NAME)?,
            owner_name: take(OWNER_NAME)?,
            owner_phone: take(OWNER_PHONE)?,
        },
    })
}

/// Book an appointment into an open slot.
#[utoipa::path(
    post,
    path = "/appointments",
    request_body = AppointmentRequestBody,
    responses(
        (status = 201, description = "Appointment confirmed", body = AppointmentResponse),
        (
            status = 400,
            description = "Malformed body, missing fields, or booking rejected",
            body = ErrorSchema
        ),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["appointments"],
    operation_id = "bookAppointment"
)]
#[post("/appointments")]
pub async fn book_appointment(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let request = parse_booking(&body)?;
    let confirmation = state.bookings.book_appointment(request).await?;
    Ok(HttpResponse::Created().json(AppointmentResponse::from(confirmation)))
}

#[cfg(test)]
mod tests {
    //! Handler tests against mocked ports.

    use super::*;
    use crate::domain::AppointmentId;
    use crate::domain::ports::{FixtureCatalogueQuery, MockBookingCommand};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::{fixture, rstest};
    use serde_json::json;
    use std::sync::Arc;

    #[fixture]
    fn valid_body() -> Value {
        json!({
            "clinicId": "clinic_abc",
            "serviceId": "svc_1",
            "petName": "Biscuit",
            "ownerName": "Jo Bloggs",
            "ownerPhone": "+44 7700 900000",
            "slot": "09:00",
        })
    }

    async fn post(bookings: MockBookingCommand, body: impl Into<web::Bytes>) -> (StatusCode, Value) {
        let state = HttpState::new(Arc::new(FixtureCatalogueQuery), Arc::new(bookings));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(book_appointment),
        )
        .await;
        let request = actix_test::TestRequest::post()
            .uri("/appointments")
            .insert_header(("content-type", "application/json"))
            .set_payload(body.into())
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let bytes = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&bytes).expect("JSON body"))
    }

    fn untouched() -> MockBookingCommand {
        let mut bookings = MockBookingCommand::new();
        bookings.expect_book_appointment().never();
        bookings
    }

    #[rstest]
    #[actix_web::test]
    async fn confirmed_bookings_return_created(valid_body: Value) {
        let mut bookings = MockBookingCommand::new();
        bookings
            .expect_book_appointment()
            .withf(|request| {
                request.clinic_id == "clinic_abc"
                    && request.slot == "09:00"
                    && request.customer.pet_name == "Biscuit"
            })
            .times(1)
            .returning(|_| Ok(BookingConfirmation::confirmed(AppointmentId::new("apt_1234abcd"))));

        let (status, body) = post(bookings, valid_body.to_string()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({ "appointmentId": "apt_1234abcd", "status": "confirmed" })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn values_are_trimmed_before_booking(mut valid_body: Value) {
        valid_body["slot"] = json!("  09:00 ");
        valid_body["clinicId"] = json!(" clinic_abc");
        let mut bookings = MockBookingCommand::new();
        bookings
            .expect_book_appointment()
            .withf(|request| request.slot == "09:00" && request.clinic_id == "clinic_abc")
            .times(1)
            .returning(|_| Ok(BookingConfirmation::confirmed(AppointmentId::new("apt_1"))));

        let (status, _) = post(bookings, valid_body.to_string()).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[rstest]
    #[case("{not json", "Invalid JSON body")]
    #[case("", "Invalid JSON body")]
    #[case("[1, 2]", "Invalid appointment payload")]
    #[case("\"clinic_abc\"", "Invalid appointment payload")]
    #[case("null", "Invalid appointment payload")]
    #[case("{}", "Missing required appointment fields")]
    #[actix_web::test]
    async fn malformed_bodies_are_rejected(#[case] body: &'static str, #[case] message: &str) {
        let (status, payload) = post(untouched(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["message"], message);
    }

    #[rstest]
    #[case("petName", json!("   "))]
    #[case("ownerPhone", json!(5_550_100))]
    #[case("slot", json!(null))]
    #[actix_web::test]
    async fn blank_or_non_string_fields_are_missing(
        mut valid_body: Value,
        #[case] field: &str,
        #[case] value: Value,
    ) {
        valid_body[field] = value;
        let (status, payload) = post(untouched(), valid_body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["message"], "Missing required appointment fields");
        assert_eq!(payload["details"]["fields"], json!([field]));
    }

    #[rstest]
    #[actix_web::test]
    async fn rejections_surface_their_message(valid_body: Value) {
        let mut bookings = MockBookingCommand::new();
        bookings.expect_book_appointment().returning(|_| {
            Err(Error::invalid_request("Selected slot is no longer available")
                .with_details(json!({"code": "slot_unavailable"})))
        });

        let (status, payload) = post(bookings, valid_body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["message"], "Selected slot is no longer available");
        assert_eq!(payload["details"]["code"], "slot_unavailable");
    }
}
