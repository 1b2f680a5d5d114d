//! Seed data for the clinic registry.
//!
//! Seeds are JSON documents describing the clinics and services available at
//! startup. Parsing validates every entity, so a successfully loaded seed
//! always produces a registry that satisfies the service invariants.

use serde::Deserialize;

use super::clinic::{
    Clinic, ClinicDraft, ClinicService, ClinicServiceDraft, ClinicValidationError,
    ServiceCategory,
};
use super::registry::ClinicRegistry;

/// Current supported seed version.
const SUPPORTED_VERSION: u32 = 1;

const BUILTIN_SEED: &str = include_str!("../../fixtures/clinics.json");

/// Errors raised while parsing a clinic seed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    /// The seed JSON is malformed or missing required fields.
    #[error("invalid seed JSON: {message}")]
    Parse {
        /// Parser diagnostic.
        message: String,
    },

    /// The seed version is not supported.
    #[error("unsupported seed version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Version this build reads.
        expected: u32,
        /// Version found in the document.
        actual: u32,
    },

    /// A service declares `available` contrary to its slot list.
    #[error("service {service_id} in clinic {clinic_id} declares availability inconsistent with its slots")]
    InconsistentAvailability {
        /// Clinic owning the service.
        clinic_id: String,
        /// Offending service.
        service_id: String,
    },

    /// An entity failed domain validation.
    #[error(transparent)]
    Invalid(#[from] ClinicValidationError),
}

/// Validated set of clinics ready to populate a [`ClinicRegistry`].
///
/// # Examples
/// ```
/// use clinic_backend::domain::seed::ClinicSeed;
///
/// let json = r#"{
///     "version": 1,
///     "clinics": [{
///         "id": "clinic_demo",
///         "name": "Demo Vets",
///         "currency": "EUR",
///         "services": [{
///             "id": "svc_demo",
///             "name": "Nail Trim",
///             "category": "checkup",
///             "basePrice": 25,
///             "duration": 10,
///             "slots": ["08:00"]
///         }]
///     }]
/// }"#;
///
/// let seed = ClinicSeed::from_json(json).expect("valid seed");
/// assert_eq!(seed.clinics().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicSeed {
    clinics: Vec<Clinic>,
}

impl ClinicSeed {
    /// Parse a seed from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the JSON is malformed, the version is
    /// unsupported, or any clinic or service is invalid.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let raw: RawSeed = serde_json::from_str(json).map_err(|e| SeedError::Parse {
            message: e.to_string(),
        })?;
        Self::from_raw(raw)
    }

    /// The clinics bundled with the service.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Validated clinics in document order.
    #[must_use]
    pub fn clinics(&self) -> &[Clinic] {
        &self.clinics
    }

    /// Build a registry, rejecting duplicate clinic ids.
    pub fn into_registry(self) -> Result<ClinicRegistry, SeedError> {
        Ok(ClinicRegistry::new(self.clinics)?)
    }

    fn from_raw(raw: RawSeed) -> Result<Self, SeedError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(SeedError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let clinics = raw
            .clinics
            .into_iter()
            .map(RawClinic::into_clinic)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clinics })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawSeed {
    version: u32,
    clinics: Vec<RawClinic>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawClinic {
    id: String,
    name: String,
    currency: String,
    services: Vec<RawService>,
}

impl RawClinic {
    fn into_clinic(self) -> Result<Clinic, SeedError> {
        let Self {
            id,
            name,
            currency,
            services: raw_services,
        } = self;
        let services = raw_services
            .into_iter()
            .map(|service| service.into_service(&id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Clinic::new(ClinicDraft {
            id,
            display_name: name,
            currency_code: currency,
            services,
        })?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawService {
    id: String,
    name: String,
    category: ServiceCategory,
    base_price: u32,
    duration: u32,
    #[serde(default)]
    available: Option<bool>,
    slots: Vec<String>,
}

impl RawService {
    fn into_service(self, clinic_id: &str) -> Result<ClinicService, SeedError> {
        if self
            .available
            .is_some_and(|declared| declared == self.slots.is_empty())
        {
            return Err(SeedError::InconsistentAvailability {
                clinic_id: clinic_id.to_owned(),
                service_id: self.id,
            });
        }
        Ok(ClinicService::new(ClinicServiceDraft {
            id: self.id,
            name: self.name,
            category: self.category,
            base_price: self.base_price,
            duration_minutes: self.duration,
            slots: self.slots,
        })?)
    }
}
