//! Error types for the native WebDriver remote end.
//!
//! This module defines the crate [`enum@Error`] and the protocol-level
//! [`ErrorStatus`] each error is reported under.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use native_webdriver::{Alert, Result};
//!
//! async fn example(alert: &Alert) -> Result<()> {
//!     alert.send_keys("hello").await?;
//!     alert.accept().await
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Protocol | [`Error::UnknownCommand`], [`Error::InvalidArgument`], [`Error::Protocol`] |
//! | Session | [`Error::Status`], [`Error::SessionUnavailable`] |
//! | Dialog | [`Error::NoSuchAlert`], [`Error::UnsupportedAlertOperation`], [`Error::DialogClosed`] |
//! | External | [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::result::Result as StdResult;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::browser::DialogKind;
use crate::identifiers::DialogHandle;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// ErrorStatus
// ============================================================================

/// Protocol error code reported to the remote client.
///
/// Serialized as the W3C WebDriver error string (e.g. `"no such alert"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorStatus {
    /// A command argument was missing or malformed.
    #[serde(rename = "invalid argument")]
    InvalidArgument,
    /// The session is not active or does not exist.
    #[serde(rename = "invalid session id")]
    InvalidSessionId,
    /// No modal dialog is open.
    #[serde(rename = "no such alert")]
    NoSuchAlert,
    /// The browser window targeted by the session is gone.
    #[serde(rename = "no such window")]
    NoSuchWindow,
    /// A modal dialog is open and blocks the command.
    #[serde(rename = "unexpected alert open")]
    UnexpectedAlertOpen,
    /// No handler is registered for the command name.
    #[serde(rename = "unknown command")]
    UnknownCommand,
    /// Generic failure in the remote end.
    #[serde(rename = "unknown error")]
    UnknownError,
    /// The target does not support the requested operation.
    #[serde(rename = "unsupported operation")]
    UnsupportedOperation,
}

impl ErrorStatus {
    /// Returns the W3C error string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::InvalidSessionId => "invalid session id",
            Self::NoSuchAlert => "no such alert",
            Self::NoSuchWindow => "no such window",
            Self::UnexpectedAlertOpen => "unexpected alert open",
            Self::UnknownCommand => "unknown command",
            Self::UnknownError => "unknown error",
            Self::UnsupportedOperation => "unsupported operation",
        }
    }

    /// Returns the HTTP status code the W3C error table assigns.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidArgument => 400,
            Self::InvalidSessionId
            | Self::NoSuchAlert
            | Self::NoSuchWindow
            | Self::UnknownCommand => 404,
            Self::UnexpectedAlertOpen | Self::UnknownError | Self::UnsupportedOperation => 500,
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when driver options are invalid or incomplete.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// Unknown command name.
    #[error("Unknown command: {command}")]
    UnknownCommand {
        /// The unrecognized command name.
        command: String,
    },

    /// Invalid argument in command parameters.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    /// Protocol violation or unexpected internal state.
    #[error("Protocol error: {message}")]
    Protocol {
        /// Description of the protocol violation.
        message: String,
    },

    // ========================================================================
    // Session Errors
    // ========================================================================
    /// Failure reported by a collaborator with an explicit status.
    ///
    /// Session accessors use this to report why no browser is available.
    #[error("{message}")]
    Status {
        /// Status to report to the client.
        status: ErrorStatus,
        /// Upstream message.
        message: String,
    },

    /// The current browser could not be resolved for a command.
    ///
    /// Carries the upstream status unchanged.
    #[error("Unable to get browser: {message}")]
    SessionUnavailable {
        /// Status propagated from the session accessor.
        status: ErrorStatus,
        /// Upstream message.
        message: String,
    },

    // ========================================================================
    // Dialog Errors
    // ========================================================================
    /// No modal dialog is open.
    #[error("No alert is active: {message}")]
    NoSuchAlert {
        /// Description of the lookup that failed.
        message: String,
    },

    /// The open dialog lacks the control an operation needs.
    #[error("Modal {kind} dialog did not have a text box - maybe it was an alert rather than a prompt")]
    UnsupportedAlertOperation {
        /// Kind of the dialog that was found.
        kind: DialogKind,
    },

    /// The dialog closed while an operation was using it.
    #[error("Dialog {handle} closed during {operation}")]
    DialogClosed {
        /// Handle of the closed dialog.
        handle: DialogHandle,
        /// Operation that was interrupted.
        operation: &'static str,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an unknown command error.
    #[inline]
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Creates an invalid argument error.
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[inline]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an error with an explicit status.
    #[inline]
    pub fn with_status(status: ErrorStatus, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Wraps a session accessor failure, keeping its status.
    #[inline]
    pub fn session_unavailable(source: &Error) -> Self {
        let message = match source {
            Self::SessionUnavailable { message, .. } => message.clone(),
            other => other.to_string(),
        };
        Self::SessionUnavailable {
            status: source.status(),
            message,
        }
    }

    /// Creates a no such alert error.
    #[inline]
    pub fn no_such_alert(message: impl Into<String>) -> Self {
        Self::NoSuchAlert {
            message: message.into(),
        }
    }

    /// Creates an unsupported alert operation error.
    #[inline]
    pub fn unsupported_alert_operation(kind: DialogKind) -> Self {
        Self::UnsupportedAlertOperation { kind }
    }

    /// Creates a dialog closed error.
    #[inline]
    pub fn dialog_closed(handle: DialogHandle, operation: &'static str) -> Self {
        Self::DialogClosed { handle, operation }
    }
}

// ============================================================================
// Error Status Mapping
// ============================================================================

impl Error {
    /// Returns the protocol status this error is reported under.
    #[must_use]
    pub fn status(&self) -> ErrorStatus {
        match self {
            Self::InvalidArgument { .. } | Self::Json(_) => ErrorStatus::InvalidArgument,
            Self::UnknownCommand { .. } => ErrorStatus::UnknownCommand,
            Self::Status { status, .. } | Self::SessionUnavailable { status, .. } => *status,
            Self::NoSuchAlert { .. } | Self::DialogClosed { .. } => ErrorStatus::NoSuchAlert,
            Self::UnsupportedAlertOperation { .. } => ErrorStatus::UnsupportedOperation,
            Self::Config { .. } | Self::Protocol { .. } => ErrorStatus::UnknownError,
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if re-issuing the command may succeed.
    ///
    /// A dialog that was not open yet, or closed under us, can be triggered
    /// again by the client.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoSuchAlert { .. } | Self::DialogClosed { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("Missing parameter: value");
        assert_eq!(err.to_string(), "Invalid argument: Missing parameter: value");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            Error::invalid_argument("x").status(),
            ErrorStatus::InvalidArgument
        );
        assert_eq!(Error::no_such_alert("x").status(), ErrorStatus::NoSuchAlert);
        assert_eq!(
            Error::unsupported_alert_operation(DialogKind::Alert).status(),
            ErrorStatus::UnsupportedOperation
        );
        assert_eq!(Error::config("x").status(), ErrorStatus::UnknownError);
    }

    #[test]
    fn test_session_unavailable_keeps_status() {
        let upstream = Error::with_status(ErrorStatus::NoSuchWindow, "window closed");
        let err = Error::session_unavailable(&upstream);

        assert_eq!(err.status(), ErrorStatus::NoSuchWindow);
        assert_eq!(err.to_string(), "Unable to get browser: window closed");
    }

    #[test]
    fn test_session_unavailable_does_not_nest() {
        let upstream = Error::with_status(ErrorStatus::InvalidSessionId, "gone");
        let once = Error::session_unavailable(&upstream);
        let twice = Error::session_unavailable(&once);
        assert_eq!(twice.to_string(), "Unable to get browser: gone");
    }

    #[test]
    fn test_unsupported_operation_mentions_alert() {
        let err = Error::unsupported_alert_operation(DialogKind::Alert);
        let message = err.to_string();
        assert!(message.contains("text box"));
        assert!(message.contains("alert"));
        assert!(message.contains("prompt"));
    }

    #[test]
    fn test_status_strings_match_serde() {
        for status in [
            ErrorStatus::InvalidArgument,
            ErrorStatus::NoSuchAlert,
            ErrorStatus::UnsupportedOperation,
            ErrorStatus::UnknownCommand,
        ] {
            let json = serde_json::to_value(status).expect("serialize");
            assert_eq!(json, serde_json::Value::String(status.as_str().to_string()));
        }
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorStatus::InvalidArgument.http_status(), 400);
        assert_eq!(ErrorStatus::NoSuchAlert.http_status(), 404);
        assert_eq!(ErrorStatus::UnsupportedOperation.http_status(), 500);
    }

    #[test]
    fn test_is_recoverable() {
        assert!(Error::no_such_alert("x").is_recoverable());
        assert!(!Error::invalid_argument("x").is_recoverable());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.status(), ErrorStatus::InvalidArgument);
    }
}
