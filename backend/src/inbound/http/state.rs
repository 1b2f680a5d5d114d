//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without a registry.

use std::sync::Arc;

use crate::domain::ports::{BookingCommand, CatalogueQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side: clinic catalogues.
    pub catalogue: Arc<dyn CatalogueQuery>,
    /// Write side: slot bookings.
    pub bookings: Arc<dyn BookingCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use clinic_backend::domain::ports::{FixtureBookingCommand, FixtureCatalogueQuery};
    /// use clinic_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureCatalogueQuery), Arc::new(FixtureBookingCommand));
    /// let _catalogue = state.catalogue.clone();
    /// ```
    #[must_use]
    pub const fn new(catalogue: Arc<dyn CatalogueQuery>, bookings: Arc<dyn BookingCommand>) -> Self {
        Self {
            catalogue,
            bookings,
        }
    }
}
