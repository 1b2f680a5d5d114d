//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use clinic_backend::domain::ClinicSchedulingService;
use clinic_backend::domain::ports::CatalogueQuery;
use clinic_backend::inbound::http::state::HttpState;

use super::ServerConfig;

/// Wire the scheduling service into both driving ports.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = Arc::new(ClinicSchedulingService::new(
        Arc::clone(&config.registry),
        Arc::clone(&config.ids),
    ));
    let catalogue: Arc<dyn CatalogueQuery> = service.clone();
    web::Data::new(HttpState::new(catalogue, service))
}

#[cfg(test)]
mod tests {
    //! Wiring coverage for the HTTP state.

    use super::*;
    use std::net::SocketAddr;

    use clinic_backend::domain::ports::{LookupServicesRequest, SequentialAppointmentIds};
    use clinic_backend::domain::{BookingRequest, ClinicSeed, CustomerDetails};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn both_ports_share_one_registry() {
        let registry = ClinicSeed::builtin()
            .and_then(ClinicSeed::into_registry)
            .expect("built-in seed is valid");
        let config = ServerConfig::new(
            SocketAddr::from(([127, 0, 0, 1], 0)),
            Arc::new(registry),
            Arc::new(SequentialAppointmentIds::default()),
        );
        let state = build_http_state(&config);

        state
            .bookings
            .book_appointment(BookingRequest {
                clinic_id: "clinic_xyz".to_owned(),
                service_id: "svc_10".to_owned(),
                slot: "13:00".to_owned(),
                customer: CustomerDetails {
                    pet_name: "Pip".to_owned(),
                    owner_name: "Lee".to_owned(),
                    owner_phone: "555-0142".to_owned(),
                },
            })
            .await
            .expect("slot is open");

        let view = state
            .catalogue
            .lookup_services(LookupServicesRequest {
                clinic_id: "clinic_xyz".to_owned(),
                category: None,
            })
            .await
            .expect("clinic exists");
        assert_eq!(view.services[0].slots(), ["09:30", "17:00"]);
    }
}
