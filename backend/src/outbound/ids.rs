//! UUID-backed appointment identifier generator.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use uuid::Uuid;

use crate::domain::AppointmentId;
use crate::domain::ports::{AppointmentIdError, AppointmentIdGenerator};

const PREFIX: &str = "apt_";
const HEX_CHARS: usize = 8;
const MAX_ATTEMPTS: u32 = 16;

/// Mints `apt_` followed by the first eight hex characters of a UUID v4.
///
/// Eight characters collide often enough over a long-lived process that every
/// issued id is remembered and a colliding draw is retried. Ids are drawn only
/// for bookings that claim a slot, so the remembered set never outgrows the
/// seeded slots.
#[derive(Debug, Default)]
pub struct UuidAppointmentIds {
    issued: Mutex<HashSet<String>>,
}

impl UuidAppointmentIds {
    /// Generator with no ids issued yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn draw() -> String {
        let hex: String = Uuid::new_v4().simple().to_string().chars().take(HEX_CHARS).collect();
        format!("{PREFIX}{hex}")
    }

    fn mint_with(
        &self,
        mut draw: impl FnMut() -> String,
    ) -> Result<AppointmentId, AppointmentIdError> {
        let mut issued = self.issued.lock().unwrap_or_else(PoisonError::into_inner);
        for _ in 0..MAX_ATTEMPTS {
            let candidate = draw();
            if issued.insert(candidate.clone()) {
                return Ok(AppointmentId::new(candidate));
            }
        }
        Err(AppointmentIdError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}

impl AppointmentIdGenerator for UuidAppointmentIds {
    fn next_id(&self) -> Result<AppointmentId, AppointmentIdError> {
        self.mint_with(Self::draw)
    }
}
