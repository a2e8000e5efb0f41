//! Success-or-failure container for service operations

use crate::error::{IntoErrorMessages, ServiceError};
use crate::status::{self, DEFAULT_FAILURE_STATUS, DEFAULT_SUCCESS_STATUS};
use http::StatusCode;

/// Outcome of a service operation
///
/// Either a typed success payload or a [`ServiceError`]. The branch is
/// fixed by the constructor used; a result never turns from one into the
/// other. Callers branch on [`is_successful`](Self::is_successful) instead
/// of unwinding for expected failures such as "not found" or validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceResult<T> {
    /// Operation succeeded
    Success {
        /// Payload handed back to the caller
        data: T,
        /// Status code, 200 unless overridden
        status_code: u16,
    },
    /// Operation failed
    Failure(ServiceError),
}

impl<T> ServiceResult<T> {
    /// Create a success result (status 200)
    pub fn new(data: T) -> Self {
        Self::Success {
            data,
            status_code: DEFAULT_SUCCESS_STATUS,
        }
    }

    /// Create a success result (alias for [`new`](Self::new))
    pub fn succeed(data: T) -> Self {
        Self::new(data)
    }

    /// Create a failure result with an explicit status code
    pub fn failure_with_status(status_code: u16, messages: impl IntoErrorMessages) -> Self {
        Self::Failure(ServiceError::new(status_code, messages))
    }

    /// Create a failure result with the default status code (500)
    pub fn failure(messages: impl IntoErrorMessages) -> Self {
        Self::failure_with_status(DEFAULT_FAILURE_STATUS, messages)
    }

    /// Replace the status code, keeping the branch and its contents
    pub fn with_status_code(mut self, code: u16) -> Self {
        match &mut self {
            Self::Success { status_code, .. } => *status_code = code,
            Self::Failure(err) => err.status_code = code,
        }
        self
    }

    // ========== Inspection ==========

    /// Whether this result came from a success constructor
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Raw status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success { status_code, .. } => *status_code,
            Self::Failure(err) => err.status_code,
        }
    }

    /// Get the HTTP status for this result
    pub fn http_status(&self) -> StatusCode {
        status::to_http_status(self.status_code())
    }

    /// Success payload, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Error messages in insertion order, if this is a failure
    pub fn error_messages(&self) -> Option<&[String]> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(err) => Some(&err.error_messages),
        }
    }

    /// Failure payload, if any
    pub fn error(&self) -> Option<&ServiceError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(err) => Some(err),
        }
    }

    // ========== Consumption ==========

    /// Take the success payload, dropping any failure
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Convert into a std `Result` so callers can use `?`
    pub fn into_result(self) -> Result<T, ServiceError> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure(err) => Err(err),
        }
    }

    /// Transform the success payload; failures pass through unchanged
    pub fn map<U, F>(self, f: F) -> ServiceResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success { data, status_code } => ServiceResult::Success {
                data: f(data),
                status_code,
            },
            Self::Failure(err) => ServiceResult::Failure(err),
        }
    }
}

/// Wrap any value as a success result
///
/// A blanket `From<T>` cannot coexist with the failure conversions below,
/// so bare values convert through this trait instead.
pub trait IntoSuccess: Sized {
    /// Wrap `self` as a success result (status 200)
    fn into_success(self) -> ServiceResult<Self>;
}

impl<T> IntoSuccess for T {
    fn into_success(self) -> ServiceResult<Self> {
        ServiceResult::new(self)
    }
}

impl<T> From<ServiceError> for ServiceResult<T> {
    fn from(err: ServiceError) -> Self {
        Self::Failure(err)
    }
}

impl<T, M: IntoErrorMessages> From<(u16, M)> for ServiceResult<T> {
    fn from((status_code, messages): (u16, M)) -> Self {
        Self::failure_with_status(status_code, messages)
    }
}

impl<T, E: Into<ServiceError>> From<Result<T, E>> for ServiceResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::new(data),
            Err(err) => Self::Failure(err.into()),
        }
    }
}

impl<T> From<ServiceResult<T>> for Result<T, ServiceError> {
    fn from(result: ServiceResult<T>) -> Self {
        result.into_result()
    }
}
