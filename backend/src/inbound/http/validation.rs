//! Shared validation helpers for inbound HTTP adapters.

use serde_json::{Map, Value, json};

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidBody,
}

impl ErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Error for a missing or blank query parameter.
pub(crate) fn missing_query_param_error(field: FieldName) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("Missing required query param: {name}")).with_details(json!({
        "field": name,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Error for body fields that are absent, blank, or not strings.
pub(crate) fn missing_fields_error(fields: &[FieldName]) -> Error {
    let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
    Error::invalid_request("Missing required appointment fields").with_details(json!({
        "fields": names,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_json_error() -> Error {
    Error::invalid_request("Invalid JSON body")
        .with_details(json!({ "code": ErrorCode::InvalidBody.as_str() }))
}

pub(crate) fn invalid_payload_error() -> Error {
    Error::invalid_request("Invalid appointment payload")
        .with_details(json!({ "code": ErrorCode::InvalidBody.as_str() }))
}

/// Trim an optional value, treating blank input as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned)
}

/// Read `field` from a JSON object as a trimmed, non-blank string.
pub(crate) fn required_string(fields: &Map<String, Value>, field: FieldName) -> Option<String> {
    non_blank(fields.get(field.as_str()).and_then(Value::as_str))
}
