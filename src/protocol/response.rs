//! Command response populated by handlers.
//!
//! A [`Response`] starts unset and is filled exactly once, either with a
//! success payload or with an error status and message. The first call
//! wins; later calls are ignored and logged.
//!
//! # Wire Format
//!
//! Success:
//! ```json
//! { "value": null }
//! ```
//!
//! Error:
//! ```json
//! {
//!   "value": {
//!     "error": "no such alert",
//!     "message": "No alert is active",
//!     "stacktrace": ""
//!   }
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::error::{ErrorStatus, Result};

// ============================================================================
// Outcome
// ============================================================================

/// Result carried by a populated [`Response`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Command succeeded with a payload (`null` for side-effect commands).
    Success(Value),
    /// Command failed.
    Error {
        /// Protocol error status.
        status: ErrorStatus,
        /// Human-readable message.
        message: String,
    },
}

// ============================================================================
// Response
// ============================================================================

/// Response to one command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    outcome: Option<Outcome>,
}

impl Response {
    /// Creates an unset response.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a successful response.
    #[must_use]
    pub fn success(value: Value) -> Self {
        Self {
            outcome: Some(Outcome::Success(value)),
        }
    }

    /// Creates an error response.
    #[must_use]
    pub fn error(status: ErrorStatus, message: impl Into<String>) -> Self {
        Self {
            outcome: Some(Outcome::Error {
                status,
                message: message.into(),
            }),
        }
    }

    /// Sets the success payload, unless the response is already set.
    pub fn set_success_response(&mut self, value: Value) {
        self.set(Outcome::Success(value));
    }

    /// Sets the error, unless the response is already set.
    pub fn set_error_response(&mut self, status: ErrorStatus, message: impl Into<String>) {
        self.set(Outcome::Error {
            status,
            message: message.into(),
        });
    }

    /// Sets the response from a handler result.
    pub fn set_result(&mut self, result: Result<Value>) {
        match result {
            Ok(value) => self.set_success_response(value),
            Err(e) => {
                debug!(
                    status = %e.status(),
                    recoverable = e.is_recoverable(),
                    error = %e,
                    "Command failed"
                );
                self.set_error_response(e.status(), e.to_string());
            }
        }
    }

    fn set(&mut self, outcome: Outcome) {
        match &self.outcome {
            None => self.outcome = Some(outcome),
            Some(existing) => {
                warn!(?existing, ignored = ?outcome, "Response already set");
            }
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Response {
    /// Returns the outcome, if set.
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Returns `true` once a success or error has been set.
    #[inline]
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns `true` if this is a success response.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Success(_)))
    }

    /// Returns `true` if this is an error response.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Some(Outcome::Error { .. }))
    }

    /// Returns the success payload.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match &self.outcome {
            Some(Outcome::Success(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the error status.
    #[must_use]
    pub fn status(&self) -> Option<ErrorStatus> {
        match &self.outcome {
            Some(Outcome::Error { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Error { message, .. }) => Some(message),
            _ => None,
        }
    }

    /// Returns the HTTP status code for the response.
    ///
    /// An unset response is reported as an internal error.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match &self.outcome {
            Some(Outcome::Success(_)) => 200,
            Some(Outcome::Error { status, .. }) => status.http_status(),
            None => ErrorStatus::UnknownError.http_status(),
        }
    }

    /// Serializes the response body.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match &self.outcome {
            Some(Outcome::Success(value)) => json!({ "value": value }),
            Some(Outcome::Error { status, message }) => error_body(*status, message),
            None => error_body(ErrorStatus::UnknownError, "Command produced no response"),
        }
    }
}

fn error_body(status: ErrorStatus, message: &str) -> Value {
    json!({
        "value": {
            "error": status.as_str(),
            "message": message,
            "stacktrace": "",
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Error;

    #[test]
    fn test_new_is_unset() {
        let response = Response::new();
        assert!(!response.is_set());
        assert!(!response.is_success());
        assert!(!response.is_error());
        assert_eq!(response.http_status(), 500);
    }

    #[test]
    fn test_success_null() {
        let mut response = Response::new();
        response.set_success_response(Value::Null);

        assert!(response.is_success());
        assert_eq!(response.value(), Some(&Value::Null));
        assert_eq!(response.to_json(), json!({"value": null}));
        assert_eq!(response.http_status(), 200);
    }

    #[test]
    fn test_error_body() {
        let response = Response::error(ErrorStatus::NoSuchAlert, "No alert is active");

        assert_eq!(
            response.to_json(),
            json!({"value": {
                "error": "no such alert",
                "message": "No alert is active",
                "stacktrace": "",
            }})
        );
        assert_eq!(response.http_status(), 404);
    }

    #[test]
    fn test_first_set_wins() {
        let mut response = Response::new();
        response.set_error_response(ErrorStatus::InvalidArgument, "bad");
        response.set_success_response(Value::Null);
        response.set_error_response(ErrorStatus::UnknownError, "later");

        assert!(response.is_error());
        assert!(response.value().is_none());
        assert_eq!(response.status(), Some(ErrorStatus::InvalidArgument));
        assert_eq!(response.message(), Some("bad"));
    }

    #[test]
    fn test_set_result() {
        let mut ok = Response::new();
        ok.set_result(Ok(json!("text")));
        assert_eq!(ok.value(), Some(&json!("text")));

        let mut err = Response::new();
        err.set_result(Err(Error::no_such_alert("gone")));
        assert_eq!(err.status(), Some(ErrorStatus::NoSuchAlert));
        assert_eq!(err.message(), Some("No alert is active: gone"));
    }
}
