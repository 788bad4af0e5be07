//! Application constants module.
//!
//! Centralizes the message strings and machine-readable error codes returned
//! by the API.

pub mod error_codes;
pub mod errors;
pub mod messages;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
