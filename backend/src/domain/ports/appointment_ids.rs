//! Driven port for minting appointment identifiers.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::AppointmentId;

/// Errors raised while minting appointment identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentIdError {
    /// No unused identifier was found within the retry budget.
    #[error("no unused appointment id after {attempts} attempts")]
    Exhausted {
        /// Draws made before giving up.
        attempts: u32,
    },
}

/// Source of identifiers that are unique for the life of the process.
#[cfg_attr(test, mockall::automock)]
pub trait AppointmentIdGenerator: Send + Sync {
    /// Mint an id that has not been handed out before.
    fn next_id(&self) -> Result<AppointmentId, AppointmentIdError>;
}

/// Deterministic generator yielding `apt_00000001`, `apt_00000002`, ...
///
/// # Examples
/// ```
/// use clinic_backend::domain::ports::{AppointmentIdGenerator, SequentialAppointmentIds};
///
/// let ids = SequentialAppointmentIds::default();
/// assert_eq!(ids.next_id().expect("id").as_ref(), "apt_00000001");
/// assert_eq!(ids.next_id().expect("id").as_ref(), "apt_00000002");
/// ```
#[derive(Debug, Default)]
pub struct SequentialAppointmentIds {
    issued: AtomicU64,
}

impl AppointmentIdGenerator for SequentialAppointmentIds {
    fn next_id(&self) -> Result<AppointmentId, AppointmentIdError> {
        let next = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(AppointmentId::new(format!("apt_{next:08}")))
    }
}
