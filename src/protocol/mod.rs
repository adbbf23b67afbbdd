//! Protocol message types.
//!
//! This module defines what flows between the transport and the handlers.
//!
//! # Protocol Overview
//!
//! | Type | Direction | Purpose |
//! |------|-----------|---------|
//! | `Request` | Transport → Driver | Command name and parameters |
//! | `ParameterMap` | Driver → Handler | Read-only parameter view |
//! | `Response` | Handler → Transport | Success payload or error |
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `command` | Built-in command names |
//! | `params` | Parameter accessors |
//! | `request` | Request decoding |
//! | `response` | Set-once response |

// ============================================================================
// Submodules
// ============================================================================

/// Built-in command names.
pub mod command;

/// Command parameter accessors.
pub mod params;

/// Request message type.
pub mod request;

/// Response message type.
pub mod response;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::AlertCommand;
pub use params::ParameterMap;
pub use request::Request;
pub use response::{Outcome, Response};
