//! Service result types
//!
//! A single carrier for the outcome of an application/service operation,
//! handed across to the HTTP-facing layer:
//! - [`ServiceResult`]: either a success payload or a [`ServiceError`]
//! - [`ServiceError`]: status code plus ordered error messages
//! - [`status`]: status code defaults and `http::StatusCode` mapping
//!
//! # Example
//!
//! ```
//! use service_result::{IntoSuccess, ServiceResult};
//!
//! let found: ServiceResult<u32> = 42.into_success();
//! assert!(found.is_successful());
//! assert_eq!(found.status_code(), 200);
//!
//! let missing: ServiceResult<u32> = (404, "not found").into();
//! assert_eq!(missing.status_code(), 404);
//! assert_eq!(missing.error_messages(), Some(&["not found".to_string()][..]));
//!
//! let broken = ServiceResult::<u32>::failure(vec!["bad input", "missing field"]);
//! assert_eq!(broken.status_code(), 500);
//! ```

mod body;
pub mod error;
mod logging;
pub mod result;
pub mod status;

// Re-exports
pub use error::{IntoErrorMessages, ServiceError};
pub use result::{IntoSuccess, ServiceResult};
pub use status::{DEFAULT_FAILURE_STATUS, DEFAULT_SUCCESS_STATUS};
