//! Driving port for appointment bookings.

use async_trait::async_trait;

use crate::domain::{AppointmentId, BookingConfirmation, BookingRequest, Error};

/// Port for consuming a slot and confirming an appointment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Book the requested slot.
    ///
    /// Rejections are reported as [`crate::domain::ErrorCode::InvalidRequest`]
    /// errors whose details carry the rejection code.
    async fn book_appointment(&self, request: BookingRequest)
    -> Result<BookingConfirmation, Error>;
}

/// Fixture implementation that confirms every booking with a fixed id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingCommand;

#[async_trait]
impl BookingCommand for FixtureBookingCommand {
    async fn book_appointment(
        &self,
        _request: BookingRequest,
    ) -> Result<BookingConfirmation, Error> {
        Ok(BookingConfirmation::confirmed(AppointmentId::new(
            "apt_fixture",
        )))
    }
}
