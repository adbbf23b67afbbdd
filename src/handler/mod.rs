//! Command handlers and dispatch.
//!
//! Every protocol verb is a [`CommandHandler`] registered under its command
//! name in a [`CommandDispatcher`]. Adding a verb means registering another
//! handler; the dispatcher itself does not change.
//!
//! # Handler Contract
//!
//! A handler always leaves the [`Response`] populated: every failure it
//! knows about ends in [`Response::set_error_response`]. Anything it does
//! not anticipate (a panic, or returning without a response) is turned into
//! an `unknown error` by the dispatcher.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `alert` | Modal dialog handlers |
//! | `registry` | Name → handler dispatch |

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::browser::SessionAccessor;
use crate::protocol::{ParameterMap, Response};

// ============================================================================
// Submodules
// ============================================================================

/// Modal dialog handlers.
pub mod alert;

/// Command registry and dispatch.
pub mod registry;

// ============================================================================
// Re-exports
// ============================================================================

pub use alert::{AcceptAlertHandler, DismissAlertHandler, GetAlertTextHandler, SendKeysToAlertHandler};
pub use registry::CommandDispatcher;

// ============================================================================
// CommandHandler
// ============================================================================

/// Implementation of one protocol verb.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Runs the command and populates `response`.
    async fn execute_internal(
        &self,
        sessions: &dyn SessionAccessor,
        params: &ParameterMap,
        response: &mut Response,
    );
}
