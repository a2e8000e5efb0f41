//! Status code defaults and HTTP status mapping
//!
//! Results carry the raw integer status code they were built with. Nothing
//! is validated at construction; only [`to_http_status`] interprets it.

use http::StatusCode;

/// Status code of a successful result unless overridden (200 OK)
pub const DEFAULT_SUCCESS_STATUS: u16 = 200;

/// Status code of a failure built without one (500 Internal Server Error)
pub const DEFAULT_FAILURE_STATUS: u16 = 500;

/// Map a raw status code onto an HTTP status
///
/// Codes outside `100..=999` are not representable and fall back to
/// 500 Internal Server Error.
pub fn to_http_status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Whether the code is in the 4xx range
pub fn is_client_error(code: u16) -> bool {
    (400..500).contains(&code)
}

/// Whether the code is in the 5xx range
pub fn is_server_error(code: u16) -> bool {
    (500..600).contains(&code)
}
