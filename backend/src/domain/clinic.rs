//! Clinic and bookable service entities.
//!
//! A [`ClinicService`] owns its open slots and keeps `available` equal to
//! "has at least one open slot". Slot removal is the only mutation and is
//! reachable solely through [`Clinic::claim_slot`], so the invariant cannot be
//! broken from outside this module.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::booking::{AppointmentId, BookingFailure, BookingRejection};
use super::ports::AppointmentIdGenerator;

/// Validation failures raised while assembling clinics and services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClinicValidationError {
    /// A clinic was given an empty id.
    #[error("clinic id must not be empty")]
    EmptyClinicId,
    /// A clinic has no display name.
    #[error("clinic {clinic_id} must have a display name")]
    EmptyDisplayName {
        /// Offending clinic.
        clinic_id: String,
    },
    /// A clinic has no currency code.
    #[error("clinic {clinic_id} must have a currency code")]
    EmptyCurrency {
        /// Offending clinic.
        clinic_id: String,
    },
    /// A service was given an empty id.
    #[error("service id must not be empty")]
    EmptyServiceId,
    /// A service has no name.
    #[error("service {service_id} must have a name")]
    EmptyServiceName {
        /// Offending service.
        service_id: String,
    },
    /// A slot label is empty or whitespace.
    #[error("service {service_id} contains a blank slot label")]
    BlankSlot {
        /// Service listing the blank label.
        service_id: String,
    },
    /// A slot label appears twice in one service.
    #[error("service {service_id} lists slot {slot} more than once")]
    DuplicateSlot {
        /// Service listing the label.
        service_id: String,
        /// The repeated label.
        slot: String,
    },
    /// A service id appears twice in one clinic.
    #[error("clinic {clinic_id} lists service {service_id} more than once")]
    DuplicateService {
        /// Clinic listing the service.
        clinic_id: String,
        /// The repeated service id.
        service_id: String,
    },
    /// A clinic id appears twice in one registry.
    #[error("clinic {clinic_id} is registered more than once")]
    DuplicateClinic {
        /// The repeated clinic id.
        clinic_id: String,
    },
}

/// Closed set of service categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    /// Routine examinations.
    Checkup,
    /// Vaccines and boosters.
    Vaccination,
    /// Procedures under anaesthetic.
    Surgery,
}

impl ServiceCategory {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checkup => "checkup",
            Self::Vaccination => "vaccination",
            Self::Surgery => "surgery",
        }
    }

    /// Interpret an optional filter value.
    ///
    /// Unrecognised values mean "no filter" rather than an error.
    ///
    /// # Examples
    /// ```
    /// use clinic_backend::domain::ServiceCategory;
    ///
    /// assert_eq!(
    ///     ServiceCategory::from_filter(Some("surgery")),
    ///     Some(ServiceCategory::Surgery)
    /// );
    /// assert_eq!(ServiceCategory::from_filter(Some("grooming")), None);
    /// assert_eq!(ServiceCategory::from_filter(None), None);
    /// ```
    #[must_use]
    pub fn from_filter(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|value| value.parse().ok())
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`ServiceCategory`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service category: {0}")]
pub struct UnknownServiceCategory(String);

impl FromStr for ServiceCategory {
    type Err = UnknownServiceCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkup" => Ok(Self::Checkup),
            "vaccination" => Ok(Self::Vaccination),
            "surgery" => Ok(Self::Surgery),
            other => Err(UnknownServiceCategory(other.to_owned())),
        }
    }
}

/// Input for [`ClinicService::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicServiceDraft {
    /// Service id, unique within its clinic.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category used for filtering.
    pub category: ServiceCategory,
    /// Price in whole units of the clinic currency.
    pub base_price: u32,
    /// Appointment length.
    pub duration_minutes: u32,
    /// Open slot labels in display order.
    pub slots: Vec<String>,
}

/// A bookable offering and its open slots.
///
/// ## Invariants
/// - `id` and `name` are non-empty.
/// - slot labels are non-blank and unique.
/// - `available == !slots.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicService {
    id: String,
    name: String,
    category: ServiceCategory,
    base_price: u32,
    duration_minutes: u32,
    available: bool,
    slots: Vec<String>,
}

impl ClinicService {
    /// Validate a draft; availability is derived from the slots.
    pub fn new(draft: ClinicServiceDraft) -> Result<Self, ClinicValidationError> {
        let ClinicServiceDraft {
            id,
            name,
            category,
            base_price,
            duration_minutes,
            slots,
        } = draft;

        if id.trim().is_empty() {
            return Err(ClinicValidationError::EmptyServiceId);
        }
        if name.trim().is_empty() {
            return Err(ClinicValidationError::EmptyServiceName { service_id: id });
        }

        let mut seen = HashSet::with_capacity(slots.len());
        for slot in &slots {
            if slot.trim().is_empty() {
                return Err(ClinicValidationError::BlankSlot { service_id: id });
            }
            if !seen.insert(slot.as_str()) {
                return Err(ClinicValidationError::DuplicateSlot {
                    service_id: id,
                    slot: slot.clone(),
                });
            }
        }

        Ok(Self {
            available: !slots.is_empty(),
            id,
            name,
            category,
            base_price,
            duration_minutes,
            slots,
        })
    }

    /// Service id, unique within its clinic.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Category used for filtering.
    #[must_use]
    pub const fn category(&self) -> ServiceCategory {
        self.category
    }

    /// Price in whole units of the clinic currency.
    #[must_use]
    pub const fn base_price(&self) -> u32 {
        self.base_price
    }

    /// Appointment length in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Whether any slot is still open.
    #[must_use]
    pub const fn available(&self) -> bool {
        self.available
    }

    /// Open slot labels in display order.
    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    fn take_slot(
        &mut self,
        slot: &str,
        ids: &dyn AppointmentIdGenerator,
    ) -> Result<AppointmentId, BookingFailure> {
        if !self.available {
            return Err(BookingRejection::ServiceUnavailable.into());
        }
        let position = self
            .slots
            .iter()
            .position(|open| open == slot)
            .ok_or(BookingRejection::SlotUnavailable)?;
        let appointment_id = ids.next_id()?;
        self.slots.remove(position);
        self.available = !self.slots.is_empty();
        Ok(appointment_id)
    }
}

/// Input for [`Clinic::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicDraft {
    /// Registry key for the clinic.
    pub id: String,
    /// Name shown to clients.
    pub display_name: String,
    /// Currency code such as `USD`.
    pub currency_code: String,
    /// Services in display order.
    pub services: Vec<ClinicService>,
}

/// A clinic and its services in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clinic {
    id: String,
    display_name: String,
    currency_code: String,
    services: Vec<ClinicService>,
}

impl Clinic {
    /// Validate a draft, rejecting duplicate service ids.
    pub fn new(draft: ClinicDraft) -> Result<Self, ClinicValidationError> {
        let ClinicDraft {
            id,
            display_name,
            currency_code,
            services,
        } = draft;

        if id.trim().is_empty() {
            return Err(ClinicValidationError::EmptyClinicId);
        }
        if display_name.trim().is_empty() {
            return Err(ClinicValidationError::EmptyDisplayName { clinic_id: id });
        }
        if currency_code.trim().is_empty() {
            return Err(ClinicValidationError::EmptyCurrency { clinic_id: id });
        }

        let mut seen = HashSet::with_capacity(services.len());
        for service in &services {
            if !seen.insert(service.id()) {
                return Err(ClinicValidationError::DuplicateService {
                    clinic_id: id,
                    service_id: service.id().to_owned(),
                });
            }
        }

        Ok(Self {
            id,
            display_name,
            currency_code,
            services,
        })
    }

    /// Registry key for the clinic.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Name shown to clients.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Currency the service prices are quoted in.
    #[must_use]
    pub fn currency_code(&self) -> &str {
        self.currency_code.as_str()
    }

    /// Services in insertion order.
    #[must_use]
    pub fn services(&self) -> &[ClinicService] {
        &self.services
    }

    /// Copy out the clinic metadata and the services matching `filter`.
    #[must_use]
    pub fn catalogue(&self, filter: Option<ServiceCategory>) -> CatalogueView {
        let services = self
            .services
            .iter()
            .filter(|service| filter.is_none_or(|category| service.category == category))
            .cloned()
            .collect();
        CatalogueView {
            clinic_id: self.id.clone(),
            clinic_name: self.display_name.clone(),
            currency: self.currency_code.clone(),
            services,
        }
    }

    /// Validate `slot` on `service_id`, mint an id from `ids`, then consume
    /// the slot.
    ///
    /// Checks run in order (service exists, service available, slot open).
    /// An id is only drawn once every check has passed, and any failure
    /// leaves the clinic untouched.
    pub(crate) fn claim_slot(
        &mut self,
        service_id: &str,
        slot: &str,
        ids: &dyn AppointmentIdGenerator,
    ) -> Result<AppointmentId, BookingFailure> {
        let service = self
            .services
            .iter_mut()
            .find(|service| service.id == service_id)
            .ok_or(BookingRejection::ServiceNotFound)?;
        service.take_slot(slot, ids)
    }
}

/// Read model returned by catalogue lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueView {
    /// Clinic the view was taken from.
    pub clinic_id: String,
    /// Display name of that clinic.
    pub clinic_name: String,
    /// Currency code for the prices.
    pub currency: String,
    /// Matching services in insertion order.
    pub services: Vec<ClinicService>,
}
