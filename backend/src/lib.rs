//! Clinic scheduling backend library.
//!
//! The crate follows a hexagonal layout: [`domain`] owns the registry, the
//! booking rules, and the driving ports; [`inbound`] adapts HTTP requests onto
//! those ports; [`outbound`] supplies infrastructure such as id generation.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
pub mod startup;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
