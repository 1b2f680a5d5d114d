//! Clinic scheduling service.
//!
//! Implements the catalogue and booking driving ports on top of a shared
//! [`ClinicRegistry`] and an injected [`AppointmentIdGenerator`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    AppointmentIdGenerator, BookingCommand, CatalogueQuery, LookupServicesRequest,
};
use crate::domain::{
    BookingConfirmation, BookingFailure, BookingRejection, BookingRequest, CatalogueView,
    ClinicRegistry, Error,
};

/// Scheduling service implementing the catalogue and booking ports.
#[derive(Clone)]
pub struct ClinicSchedulingService {
    registry: Arc<ClinicRegistry>,
    ids: Arc<dyn AppointmentIdGenerator>,
}

impl ClinicSchedulingService {
    /// Create a service over `registry`, minting ids from `ids`.
    #[must_use]
    pub const fn new(registry: Arc<ClinicRegistry>, ids: Arc<dyn AppointmentIdGenerator>) -> Self {
        Self { registry, ids }
    }
}

#[async_trait]
impl CatalogueQuery for ClinicSchedulingService {
    async fn lookup_services(
        &self,
        request: LookupServicesRequest,
    ) -> Result<CatalogueView, Error> {
        self.registry
            .lookup_services(&request.clinic_id, request.category)
            .ok_or_else(|| Error::not_found(BookingRejection::ClinicNotFound.to_string()))
    }
}

#[async_trait]
impl BookingCommand for ClinicSchedulingService {
    async fn book_appointment(
        &self,
        request: BookingRequest,
    ) -> Result<BookingConfirmation, Error> {
        match self.registry.book_slot(&request, self.ids.as_ref()) {
            Ok(confirmation) => {
                info!(
                    clinic_id = %request.clinic_id,
                    service_id = %request.service_id,
                    slot = %request.slot,
                    appointment_id = %confirmation.appointment_id,
                    "appointment confirmed"
                );
                Ok(confirmation)
            }
            Err(BookingFailure::Rejected(rejection)) => {
                debug!(
                    clinic_id = %request.clinic_id,
                    service_id = %request.service_id,
                    slot = %request.slot,
                    reason = rejection.code(),
                    "booking rejected"
                );
                Err(rejection.into())
            }
            Err(BookingFailure::IdUnavailable(err)) => {
                warn!(error = %err, "appointment id generation failed");
                Err(Error::internal(format!(
                    "appointment id generation failed: {err}"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the scheduling service.

    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    use crate::domain::ports::{AppointmentIdError, MockAppointmentIdGenerator};
    use crate::domain::seed::ClinicSeed;
    use crate::domain::{
        AppointmentId, AppointmentStatus, CustomerDetails, ErrorCode, ServiceCategory,
    };

    #[fixture]
    fn registry() -> Arc<ClinicRegistry> {
        Arc::new(
            ClinicSeed::builtin()
                .and_then(ClinicSeed::into_registry)
                .expect("built-in seed is valid"),
        )
    }

    fn ids_returning(id: &'static str) -> Arc<dyn AppointmentIdGenerator> {
        let mut ids = MockAppointmentIdGenerator::new();
        ids.expect_next_id()
            .returning(move || Ok(AppointmentId::new(id)));
        Arc::new(ids)
    }

    fn request(service_id: &str, slot: &str) -> BookingRequest {
        BookingRequest {
            clinic_id: "clinic_abc".to_owned(),
            service_id: service_id.to_owned(),
            slot: slot.to_owned(),
            customer: CustomerDetails {
                pet_name: "Mochi".to_owned(),
                owner_name: "Ari".to_owned(),
                owner_phone: "555-0199".to_owned(),
            },
        }
    }

    #[rstest]
    #[tokio::test]
    async fn confirmed_bookings_carry_the_minted_id(registry: Arc<ClinicRegistry>) {
        let service = ClinicSchedulingService::new(registry, ids_returning("apt_deadbeef"));
        let confirmation = service
            .book_appointment(request("svc_1", "14:00"))
            .await
            .expect("booking succeeds");
        assert_eq!(confirmation.appointment_id.as_ref(), "apt_deadbeef");
        assert_eq!(confirmation.status, AppointmentStatus::Confirmed);
    }

    #[rstest]
    #[tokio::test]
    async fn rejections_become_invalid_requests_with_codes(registry: Arc<ClinicRegistry>) {
        let service = ClinicSchedulingService::new(registry, ids_returning("apt_1"));
        let error = service
            .book_appointment(request("svc_3", "09:00"))
            .await
            .expect_err("surgery is unavailable");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "Service is not currently available");
        assert_eq!(
            error.details(),
            Some(&json!({ "code": "service_unavailable" }))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn rejected_bookings_never_draw_an_id(registry: Arc<ClinicRegistry>) {
        let mut ids = MockAppointmentIdGenerator::new();
        ids.expect_next_id().never();
        let service = ClinicSchedulingService::new(registry, Arc::new(ids));

        for _ in 0..64 {
            let mut unknown_clinic = request("svc_1", "09:00");
            unknown_clinic.clinic_id = "clinic_nope".to_owned();
            let attempts = [
                unknown_clinic,
                request("svc_3", "09:00"),
                request("svc_1", "23:59"),
            ];
            for attempt in attempts {
                service
                    .book_appointment(attempt)
                    .await
                    .expect_err("booking is rejected");
            }
        }
    }

    #[rstest]
    #[tokio::test]
    async fn id_generation_failures_are_internal_and_leave_slots(registry: Arc<ClinicRegistry>) {
        let mut ids = MockAppointmentIdGenerator::new();
        ids.expect_next_id()
            .times(1)
            .returning(|| Err(AppointmentIdError::Exhausted { attempts: 16 }));
        let service = ClinicSchedulingService::new(Arc::clone(&registry), Arc::new(ids));

        let error = service
            .book_appointment(request("svc_2", "11:00"))
            .await
            .expect_err("generator is exhausted");
        assert_eq!(error.code(), ErrorCode::InternalError);

        let view = registry
            .lookup_services("clinic_abc", Some(ServiceCategory::Vaccination))
            .expect("clinic exists");
        assert_eq!(view.services[0].slots().len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_clinics_are_not_found_on_lookup(registry: Arc<ClinicRegistry>) {
        let service = ClinicSchedulingService::new(registry, ids_returning("apt_1"));
        let error = service
            .lookup_services(LookupServicesRequest {
                clinic_id: "clinic_missing".to_owned(),
                category: None,
            })
            .await
            .expect_err("clinic is unknown");
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "Clinic not found");
    }

    #[rstest]
    #[tokio::test]
    async fn lookups_observe_earlier_bookings(registry: Arc<ClinicRegistry>) {
        let service = ClinicSchedulingService::new(registry, ids_returning("apt_1"));
        service
            .book_appointment(request("svc_1", "09:00"))
            .await
            .expect("booking succeeds");
        let view = service
            .lookup_services(LookupServicesRequest {
                clinic_id: "clinic_abc".to_owned(),
                category: Some(ServiceCategory::Checkup),
            })
            .await
            .expect("clinic exists");
        assert_eq!(view.services[0].slots(), ["10:30", "14:00", "16:00"]);
    }
}
