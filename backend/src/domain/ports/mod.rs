//! Domain ports for the hexagonal boundary.

mod appointment_ids;
mod booking_command;
mod catalogue_query;

#[cfg(test)]
pub use appointment_ids::MockAppointmentIdGenerator;
pub use appointment_ids::{
    AppointmentIdError, AppointmentIdGenerator, SequentialAppointmentIds,
};
#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_command::{BookingCommand, FixtureBookingCommand};
#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::{CatalogueQuery, FixtureCatalogueQuery, LookupServicesRequest};
