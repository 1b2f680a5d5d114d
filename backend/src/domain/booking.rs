//! Booking request, confirmation, and rejection values.
//!
//! None of these are persisted: a confirmation is handed back to the caller
//! and the only lasting effect of a booking is the consumed slot.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ports::AppointmentIdError;

/// Contact details supplied with a booking.
///
/// The boundary guarantees each field is trimmed and non-blank; the booking
/// rules do not inspect them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    /// Name of the animal being seen.
    pub pet_name: String,
    /// Name of the person making the booking.
    pub owner_name: String,
    /// Contact number for the owner.
    pub owner_phone: String,
}

/// Request to consume one slot of one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// Clinic that offers the service.
    pub clinic_id: String,
    /// Service within that clinic.
    pub service_id: String,
    /// Slot label, for example `"09:00"`.
    pub slot: String,
    /// Who the appointment is for.
    pub customer: CustomerDetails,
}

/// Identifier minted for a confirmed appointment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(String);

impl AppointmentId {
    /// Wrap an already minted identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for AppointmentId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status reported for a booking. Only confirmed bookings exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// The slot was consumed and the appointment stands.
    Confirmed,
}

impl AppointmentStatus {
    /// Wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
        }
    }
}

/// Successful booking outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    /// Identifier minted for this booking.
    pub appointment_id: AppointmentId,
    /// Always [`AppointmentStatus::Confirmed`] today.
    pub status: AppointmentStatus,
}

impl BookingConfirmation {
    /// Confirmation carrying `appointment_id`.
    #[must_use]
    pub const fn confirmed(appointment_id: AppointmentId) -> Self {
        Self {
            appointment_id,
            status: AppointmentStatus::Confirmed,
        }
    }
}

/// Reason a booking was refused. Checks are evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BookingRejection {
    /// No clinic is registered under the requested id.
    #[error("Clinic not found")]
    ClinicNotFound,
    /// The clinic has no service with the requested id.
    #[error("Service not found")]
    ServiceNotFound,
    /// The service has no open slots left.
    #[error("Service is not currently available")]
    ServiceUnavailable,
    /// The slot was never offered or has already been taken.
    #[error("Selected slot is no longer available")]
    SlotUnavailable,
}

impl BookingRejection {
    /// Stable `snake_case` code exposed in error details.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ClinicNotFound => "clinic_not_found",
            Self::ServiceNotFound => "service_not_found",
            Self::ServiceUnavailable => "service_unavailable",
            Self::SlotUnavailable => "slot_unavailable",
        }
    }
}

/// Why a booking attempt did not produce a confirmation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingFailure {
    /// The booking rules refused the request.
    #[error(transparent)]
    Rejected(#[from] BookingRejection),
    /// The slot was open but no appointment id could be minted; the slot is
    /// left unclaimed.
    #[error(transparent)]
    IdUnavailable(#[from] AppointmentIdError),
}
