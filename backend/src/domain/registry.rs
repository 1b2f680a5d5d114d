//! In-memory clinic registry.
//!
//! The set of clinics is fixed when the registry is built; only the slots of
//! their services change afterwards. Each clinic sits behind its own mutex so
//! that a booking's validate-then-remove sequence is atomic with respect to
//! every other lookup or booking against the same clinic, while bookings for
//! different clinics proceed independently.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::booking::{BookingConfirmation, BookingFailure, BookingRejection, BookingRequest};
use super::clinic::{CatalogueView, Clinic, ClinicValidationError, ServiceCategory};
use super::ports::AppointmentIdGenerator;

/// Process-wide source of truth for clinic availability.
///
/// # Examples
/// ```
/// use clinic_backend::domain::ports::SequentialAppointmentIds;
/// use clinic_backend::domain::{
///     BookingFailure, BookingRejection, BookingRequest, ClinicRegistry, CustomerDetails,
///     seed::ClinicSeed,
/// };
///
/// let registry = ClinicSeed::builtin()
///     .and_then(ClinicSeed::into_registry)
///     .expect("built-in seed is valid");
/// let request = BookingRequest {
///     clinic_id: "clinic_abc".to_owned(),
///     service_id: "svc_2".to_owned(),
///     slot: "11:00".to_owned(),
///     customer: CustomerDetails {
///         pet_name: "Rex".to_owned(),
///         owner_name: "Sam".to_owned(),
///         owner_phone: "555-0100".to_owned(),
///     },
/// };
///
/// let ids = SequentialAppointmentIds::default();
/// assert!(registry.book_slot(&request, &ids).is_ok());
/// assert_eq!(
///     registry.book_slot(&request, &ids),
///     Err(BookingFailure::Rejected(BookingRejection::SlotUnavailable))
/// );
/// ```
#[derive(Debug)]
pub struct ClinicRegistry {
    clinics: HashMap<String, Mutex<Clinic>>,
}

impl ClinicRegistry {
    /// Build a registry, rejecting duplicate clinic ids.
    pub fn new(clinics: impl IntoIterator<Item = Clinic>) -> Result<Self, ClinicValidationError> {
        let mut map = HashMap::new();
        for clinic in clinics {
            let clinic_id = clinic.id().to_owned();
            if map.contains_key(&clinic_id) {
                return Err(ClinicValidationError::DuplicateClinic { clinic_id });
            }
            map.insert(clinic_id, Mutex::new(clinic));
        }
        Ok(Self { clinics: map })
    }

    /// Number of registered clinics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clinics.len()
    }

    /// Whether no clinics are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clinics.is_empty()
    }

    /// Return the clinic's metadata and the services matching `filter`, or
    /// `None` when the clinic is unknown.
    #[must_use]
    pub fn lookup_services(
        &self,
        clinic_id: &str,
        filter: Option<ServiceCategory>,
    ) -> Option<CatalogueView> {
        self.lock(clinic_id).map(|clinic| clinic.catalogue(filter))
    }

    /// Validate `request` against current availability and consume its slot.
    ///
    /// The clinic lock is held across validation, id minting, and removal, so
    /// two callers racing for the same slot observe exactly one success.
    /// Rejected requests never draw from `ids`.
    pub fn book_slot(
        &self,
        request: &BookingRequest,
        ids: &dyn AppointmentIdGenerator,
    ) -> Result<BookingConfirmation, BookingFailure> {
        let mut clinic = self
            .lock(&request.clinic_id)
            .ok_or(BookingRejection::ClinicNotFound)?;
        let appointment_id = clinic.claim_slot(&request.service_id, &request.slot, ids)?;
        Ok(BookingConfirmation::confirmed(appointment_id))
    }

    fn lock(&self, clinic_id: &str) -> Option<MutexGuard<'_, Clinic>> {
        // Slot removal cannot panic part-way, so a poisoned clinic is still
        // consistent.
        self.clinics
            .get(clinic_id)
            .map(|clinic| clinic.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
