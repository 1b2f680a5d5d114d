//! HTTP inbound adapter exposing the clinic REST endpoints.

pub mod appointments;
pub mod error;
pub mod health;
pub mod schemas;
pub mod services;
pub mod state;
pub mod validation;

pub use error::ApiResult;
