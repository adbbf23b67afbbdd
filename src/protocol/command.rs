//! Names of the built-in protocol commands.
//!
//! # Alert Commands
//!
//! | Command | Parameters | Payload |
//! |---------|------------|---------|
//! | `getAlertText` | none | message string or `null` |
//! | `sendKeysToAlert` | `value`: array of single characters | `null` |
//! | `acceptAlert` | none | `null` |
//! | `dismissAlert` | none | `null` |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// AlertCommand
// ============================================================================

/// Commands acting on the current modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertCommand {
    /// Read the dialog message.
    #[serde(rename = "getAlertText")]
    GetAlertText,
    /// Type into the dialog's text box.
    #[serde(rename = "sendKeysToAlert")]
    SendKeysToAlert,
    /// Press OK.
    #[serde(rename = "acceptAlert")]
    AcceptAlert,
    /// Press Cancel (or OK on a plain alert).
    #[serde(rename = "dismissAlert")]
    DismissAlert,
}

impl AlertCommand {
    /// All alert commands.
    pub const ALL: [Self; 4] = [
        Self::GetAlertText,
        Self::SendKeysToAlert,
        Self::AcceptAlert,
        Self::DismissAlert,
    ];

    /// Returns the wire name used for dispatch.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetAlertText => "getAlertText",
            Self::SendKeysToAlert => "sendKeysToAlert",
            Self::AcceptAlert => "acceptAlert",
            Self::DismissAlert => "dismissAlert",
        }
    }
}

impl fmt::Display for AlertCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| Error::unknown_command(s))
    }
}

// ============================================================================
// Tests
// ============================================================================
