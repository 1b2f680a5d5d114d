//! Races many bookings for the same slot across threads.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::{Arc, Barrier};
use std::thread;

use clinic_backend::domain::ports::AppointmentIdGenerator;
use clinic_backend::domain::{
    AppointmentId, BookingFailure, BookingRejection, BookingRequest, ClinicRegistry, ClinicSeed,
    CustomerDetails, ServiceCategory,
};
use clinic_backend::outbound::UuidAppointmentIds;
use rstest::{fixture, rstest};

const CONTENDERS: usize = 16;

#[fixture]
fn registry() -> Arc<ClinicRegistry> {
    Arc::new(
        ClinicSeed::builtin()
            .and_then(ClinicSeed::into_registry)
            .expect("built-in seed is valid"),
    )
}

fn request(slot: &str, contender: usize) -> BookingRequest {
    BookingRequest {
        clinic_id: "clinic_xyz".to_owned(),
        service_id: "svc_11".to_owned(),
        slot: slot.to_owned(),
        customer: CustomerDetails {
            pet_name: format!("Pet {contender}"),
            owner_name: format!("Owner {contender}"),
            owner_phone: format!("555-{contender:04}"),
        },
    }
}

fn race(
    registry: &Arc<ClinicRegistry>,
    ids: &Arc<dyn AppointmentIdGenerator>,
    slot: &'static str,
) -> Vec<Result<AppointmentId, BookingFailure>> {
    let barrier = Arc::new(Barrier::new(CONTENDERS));
    let handles: Vec<_> = (0..CONTENDERS)
        .map(|contender| {
            let shared = Arc::clone(registry);
            let generator = Arc::clone(ids);
            let start = Arc::clone(&barrier);
            thread::spawn(move || {
                start.wait();
                shared
                    .book_slot(&request(slot, contender), generator.as_ref())
                    .map(|confirmation| confirmation.appointment_id)
            })
        })
        .collect();
    handles
        .into_iter()
        .map(|handle| handle.join().expect("contender thread completes"))
        .collect()
}

fn assert_one_winner(
    outcomes: &[Result<AppointmentId, BookingFailure>],
    losers_see: BookingRejection,
) {
    assert_eq!(outcomes.iter().filter(|outcome| outcome.is_ok()).count(), 1);
    for outcome in outcomes.iter().filter_map(|outcome| outcome.as_ref().err()) {
        assert_eq!(outcome, &BookingFailure::Rejected(losers_see));
    }
}

#[rstest]
fn losers_of_an_ordinary_slot_see_it_taken(registry: Arc<ClinicRegistry>) {
    let ids: Arc<dyn AppointmentIdGenerator> = Arc::new(UuidAppointmentIds::new());
    let outcomes = race(&registry, &ids, "11:30");
    assert_one_winner(&outcomes, BookingRejection::SlotUnavailable);
}

#[rstest]
fn losers_of_the_last_slot_see_the_service_closed(registry: Arc<ClinicRegistry>) {
    let ids: Arc<dyn AppointmentIdGenerator> = Arc::new(UuidAppointmentIds::new());
    assert_one_winner(
        &race(&registry, &ids, "10:00"),
        BookingRejection::SlotUnavailable,
    );
    assert_one_winner(
        &race(&registry, &ids, "11:30"),
        BookingRejection::SlotUnavailable,
    );

    // The winner's removal empties the service before any loser is checked.
    let outcomes = race(&registry, &ids, "16:00");
    assert_one_winner(&outcomes, BookingRejection::ServiceUnavailable);

    let view = registry
        .lookup_services("clinic_xyz", Some(ServiceCategory::Vaccination))
        .expect("clinic exists");
    let rabies = view.services.first().expect("svc_11 listed");
    assert!(rabies.slots().is_empty());
    assert!(!rabies.available());
}
