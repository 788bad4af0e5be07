//! Error message constants used throughout the application.

pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";
pub const ERR_INVALID_BODY: &str = "Invalid request body";
pub const ERR_MISSING_INSERT_ID: &str = "Store did not report an id for the inserted user";
