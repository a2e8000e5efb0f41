//! Outcome logging
//!
//! Construction never logs. Callers decide when an outcome is worth an
//! event, typically once at the service boundary.

use crate::result::ServiceResult;
use crate::status;

impl<T> ServiceResult<T> {
    /// Emit a tracing event describing this outcome
    ///
    /// 5xx failures log at `error`, other failures at `warn` and successes
    /// at `debug`.
    pub fn log_outcome(&self, operation: &str) {
        match self {
            Self::Success { status_code, .. } => {
                tracing::debug!(operation, status_code, "Operation succeeded");
            }
            Self::Failure(err) if status::is_server_error(err.status_code) => {
                tracing::error!(
                    operation,
                    status_code = err.status_code,
                    messages = ?err.error_messages,
                    "Operation failed"
                );
            }
            Self::Failure(err) => {
                tracing::warn!(
                    operation,
                    status_code = err.status_code,
                    messages = ?err.error_messages,
                    "Operation rejected"
                );
            }
        }
    }

    /// Log the outcome and hand the result back, for chaining
    pub fn logged(self, operation: &str) -> Self {
        self.log_outcome(operation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_outcome_without_subscriber() {
        // No subscriber installed: logging must be a no-op
        ServiceResult::new(1).log_outcome("noop");
        ServiceResult::<i32>::failure("boom").log_outcome("noop");
        ServiceResult::<i32>::failure_with_status(404, "missing").log_outcome("noop");
    }

    #[test]
    fn test_logged_returns_self() {
        let result = ServiceResult::<i32>::failure_with_status(400, "bad").logged("validate");
        assert_eq!(result, ServiceResult::failure_with_status(400, "bad"));
    }
}
