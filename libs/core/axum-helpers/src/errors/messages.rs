//! Standard error messages and codes shared across responses.

pub const INTERNAL_ERROR: &str = "An internal server error occurred";
pub const VALIDATION_FAILED: &str = "Request validation failed";
pub const INVALID_UUID: &str = "Invalid UUID format";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";

// Codes for client-side branching
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const CODE_CONFLICT: &str = "CONFLICT";
pub const CODE_INTERNAL: &str = "INTERNAL_ERROR";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
pub const CODE_UUID: &str = "INVALID_UUID";
pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
