//! Failure payload shared by the driving ports.
//!
//! Adapters own the rendering: the HTTP layer picks a status per
//! [`ErrorCode`] and strips internal messages before they leave the process.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{BookingRejection, TraceId};

/// Failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed input or a booking refused by availability rules.
    InvalidRequest,
    /// The clinic being listed does not exist.
    NotFound,
    /// An unexpected failure; its message is never shown to clients.
    InternalError,
}

impl ErrorCode {
    const fn generic_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::NotFound => "Not found",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Error returned across the port boundary.
///
/// The message is never blank and is what clients read in the `message`
/// field. `details` carries machine-readable extras such as the rejection
/// code of a refused booking.
///
/// # Examples
/// ```
/// use clinic_backend::domain::{BookingRejection, Error, ErrorCode};
///
/// let err = Error::from(BookingRejection::SlotUnavailable);
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.message(), "Selected slot is no longer available");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Build an error stamped with the trace id of the current request, if
    /// any. Blank messages fall back to the code's generic text.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let raw: String = message.into();
        let text = if raw.trim().is_empty() {
            code.generic_message().to_owned()
        } else {
            raw
        };
        Self {
            code,
            message: text,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace id of the request that raised the error, if any.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details for adapters.
    #[must_use]
    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Replace the captured trace id.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Attach structured details to the error.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Copy of this error that is safe to show a client.
    ///
    /// Internal errors lose their message and details; everything else is
    /// returned unchanged.
    #[must_use]
    pub fn redacted(&self) -> Self {
        if self.code != ErrorCode::InternalError {
            return self.clone();
        }
        Self {
            code: self.code,
            message: self.code.generic_message().to_owned(),
            trace_id: self.trace_id.clone(),
            details: None,
        }
    }
}

impl From<BookingRejection> for Error {
    fn from(rejection: BookingRejection) -> Self {
        Self::invalid_request(rejection.to_string()).with_details(json!({ "code": rejection.code() }))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
