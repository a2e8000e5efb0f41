//! Failure payload for service results

use crate::status::{self, DEFAULT_FAILURE_STATUS};
use http::StatusCode;
use thiserror::Error;

/// Conversion into an ordered list of error messages
///
/// Lets failure constructors take either one message or several:
///
/// ```
/// use service_result::ServiceError;
///
/// let one = ServiceError::new(404, "not found");
/// let many = ServiceError::new(400, vec!["bad input", "missing field"]);
/// assert_eq!(one.error_messages, vec!["not found"]);
/// assert_eq!(many.error_messages.len(), 2);
/// ```
pub trait IntoErrorMessages {
    /// Convert into messages, keeping their order
    fn into_error_messages(self) -> Vec<String>;
}

impl IntoErrorMessages for &str {
    fn into_error_messages(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoErrorMessages for String {
    fn into_error_messages(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoErrorMessages for Vec<String> {
    fn into_error_messages(self) -> Vec<String> {
        self
    }
}

impl IntoErrorMessages for Vec<&str> {
    fn into_error_messages(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoErrorMessages for &[&str] {
    fn into_error_messages(self) -> Vec<String> {
        self.iter().map(|m| m.to_string()).collect()
    }
}

impl<const N: usize> IntoErrorMessages for [&str; N] {
    fn into_error_messages(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

/// Failed outcome of a service operation
///
/// The status code follows HTTP semantics (404 not found, 400 validation,
/// 500 server error) but is kept as the raw integer the caller supplied.
/// Messages are reported in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .error_messages.join("; "))]
pub struct ServiceError {
    /// Status code classifying the failure
    pub status_code: u16,
    /// Human-readable reasons, in insertion order
    pub error_messages: Vec<String>,
}

impl ServiceError {
    /// Create a failure with an explicit status code
    pub fn new(status_code: u16, messages: impl IntoErrorMessages) -> Self {
        Self {
            status_code,
            error_messages: messages.into_error_messages(),
        }
    }

    /// Create a failure with the default status code (500)
    pub fn internal(messages: impl IntoErrorMessages) -> Self {
        Self::new(DEFAULT_FAILURE_STATUS, messages)
    }

    /// Append another message after the existing ones
    pub fn push_message(&mut self, message: impl Into<String>) {
        self.error_messages.push(message.into());
    }

    /// Builder form of [`push_message`](Self::push_message)
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.push_message(message);
        self
    }

    /// Get the HTTP status for this failure
    pub fn http_status(&self) -> StatusCode {
        status::to_http_status(self.status_code)
    }
}

impl<M: IntoErrorMessages> From<(u16, M)> for ServiceError {
    fn from((status_code, messages): (u16, M)) -> Self {
        Self::new(status_code, messages)
    }
}
