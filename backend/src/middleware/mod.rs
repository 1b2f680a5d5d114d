//! Middleware wrapped around every clinic route.

pub mod trace;

pub use trace::Trace;
