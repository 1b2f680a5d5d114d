//! Tests for HTTP error rendering.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::BookingRejection;

const TRACE_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

async fn render(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = error.error_response();
    let status = response.status();
    let trace_header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("body is readable");
    let body = serde_json::from_slice(&bytes).expect("body is JSON");
    (status, trace_header, body)
}

#[rstest]
#[case(Error::from(BookingRejection::ServiceUnavailable), StatusCode::BAD_REQUEST)]
#[case(Error::invalid_request("Missing required query param: clinicId"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("Clinic not found"), StatusCode::NOT_FOUND)]
#[case(Error::internal("id generator exhausted"), StatusCode::INTERNAL_SERVER_ERROR)]
fn codes_map_to_statuses(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(error.status_code(), status);
}

#[rstest]
#[actix_web::test]
async fn rejections_render_their_message_code_and_trace_id() {
    let error = Error::from(BookingRejection::SlotUnavailable).with_trace_id(TRACE_ID);
    let (status, trace_header, body) = render(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(trace_header.as_deref(), Some(TRACE_ID));
    assert_eq!(
        body,
        json!({
            "code": "invalid_request",
            "message": "Selected slot is no longer available",
            "traceId": TRACE_ID,
            "details": { "code": "slot_unavailable" },
        })
    );
}

#[rstest]
#[actix_web::test]
async fn internal_failures_are_sent_redacted() {
    let error = Error::internal("appointment id generation failed")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "attempts": 16 }));
    let (status, trace_header, body) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(trace_header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["message"], "Internal server error");
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn errors_outside_a_request_have_no_trace_header() {
    let (status, trace_header, body) = render(&Error::not_found("Clinic not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(trace_header, None);
    assert!(body.get("traceId").is_none());
}
