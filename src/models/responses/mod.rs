//! Response models for API endpoints.

pub mod api;

pub use api::*;
