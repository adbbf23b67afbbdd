//! Decoded command request.
//!
//! # Format
//!
//! ```json
//! {
//!   "name": "sendKeysToAlert",
//!   "sessionId": "550e8400-e29b-41d4-a716-446655440000",
//!   "parameters": { "value": ["h", "i"] }
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::identifiers::SessionId;

use super::ParameterMap;

// ============================================================================
// Request
// ============================================================================

/// A command addressed to the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Command name used to pick the handler.
    pub name: String,

    /// Session the command targets, if the transport knows it.
    #[serde(rename = "sessionId", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,

    /// Command parameters.
    #[serde(default)]
    pub parameters: ParameterMap,
}

impl Request {
    /// Creates a request without a session ID.
    #[must_use]
    pub fn new(name: impl Into<String>, parameters: ParameterMap) -> Self {
        Self {
            name: name.into(),
            session_id: None,
            parameters,
        }
    }

    /// Decodes a request from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the text is not a
    /// valid request.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
