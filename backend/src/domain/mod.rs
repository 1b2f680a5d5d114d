//! Domain entities, services, and ports for clinic scheduling.
//!
//! Public surface:
//! - [`ClinicRegistry`]: in-memory clinics, one lock per clinic.
//! - [`ClinicSchedulingService`]: implements the catalogue and booking ports.
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failure payload.

pub mod booking;
pub mod clinic;
pub mod error;
pub mod ports;
pub mod registry;
pub mod scheduling_service;
pub mod seed;
pub mod trace_id;

pub use self::booking::{
    AppointmentId, AppointmentStatus, BookingConfirmation, BookingFailure, BookingRejection,
    BookingRequest, CustomerDetails,
};
pub use self::clinic::{
    CatalogueView, Clinic, ClinicDraft, ClinicService, ClinicServiceDraft, ClinicValidationError,
    ServiceCategory, UnknownServiceCategory,
};
pub use self::error::{Error, ErrorCode};
pub use self::registry::ClinicRegistry;
pub use self::scheduling_service::ClinicSchedulingService;
pub use self::seed::{ClinicSeed, SeedError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
