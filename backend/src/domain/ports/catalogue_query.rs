//! Driving port for catalogue lookups.
//!
//! Inbound adapters ask for a clinic's services through this port and never
//! touch the registry directly.

use async_trait::async_trait;

use crate::domain::{CatalogueView, Error, ServiceCategory};

/// Request for a clinic's catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupServicesRequest {
    /// Clinic to list, matched exactly.
    pub clinic_id: String,
    /// `None` returns every service.
    pub category: Option<ServiceCategory>,
}

/// Port for reading a clinic's services.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Return the clinic metadata and matching services in insertion order.
    ///
    /// Unknown clinics yield an [`crate::domain::ErrorCode::NotFound`] error.
    async fn lookup_services(&self, request: LookupServicesRequest)
    -> Result<CatalogueView, Error>;
}

/// Fixture implementation returning an empty catalogue for any clinic.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogueQuery;

#[async_trait]
impl CatalogueQuery for FixtureCatalogueQuery {
    async fn lookup_services(
        &self,
        request: LookupServicesRequest,
    ) -> Result<CatalogueView, Error> {
        Ok(CatalogueView {
            clinic_id: request.clinic_id,
            clinic_name: "Fixture Clinic".to_owned(),
            currency: "USD".to_owned(),
            services: Vec::new(),
        })
    }
}
