//! Outbound adapters implementing domain driven ports.

pub mod ids;

pub use ids::UuidAppointmentIds;
