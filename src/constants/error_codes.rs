//! Error code constants for API responses.
//!
//! These codes give clients a stable identifier for each failure class,
//! independent of the human-readable message.

pub const CODE_INVALID_USER_ID: &str = "INVALID_USER_ID";
pub const CODE_INVALID_BODY: &str = "INVALID_BODY";
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CODE_STORE_ERROR: &str = "STORE_ERROR";
