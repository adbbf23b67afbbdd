//! Driver: entry point for executing commands.
//!
//! The [`Driver`] pairs a [`CommandDispatcher`] with the session accessor
//! handlers resolve browsers through. Transports hand it decoded
//! [`Request`]s (or raw JSON) and send back the [`Response`].

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{Instrument, info, info_span, warn};

use crate::browser::SessionAccessor;
use crate::handler::CommandDispatcher;
use crate::protocol::{Request, Response};
use crate::wait::duration_millis;

use super::builder::DriverBuilder;
use super::options::DriverOptions;

// ============================================================================
// Driver
// ============================================================================

/// Executes protocol commands against the current browser.
///
/// Commands for one session are expected to arrive one at a time; the
/// driver does not serialize them itself.
pub struct Driver {
    dispatcher: CommandDispatcher,
    sessions: Arc<dyn SessionAccessor>,
    options: DriverOptions,
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("dispatcher", &self.dispatcher)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Driver - Construction
// ============================================================================

impl Driver {
    /// Creates a configuration builder.
    #[inline]
    #[must_use]
    pub fn builder() -> DriverBuilder {
        DriverBuilder::new()
    }

    /// Creates a driver from its parts.
    pub(crate) fn new(
        dispatcher: CommandDispatcher,
        sessions: Arc<dyn SessionAccessor>,
        options: DriverOptions,
    ) -> Self {
        info!(
            commands = dispatcher.len(),
            dialog_timeout_ms = duration_millis(options.dialog_timeout),
            "Driver ready"
        );

        Self {
            dispatcher,
            sessions,
            options,
        }
    }
}

// ============================================================================
// Driver - Accessors
// ============================================================================

impl Driver {
    /// Returns the driver options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// Returns `true` if a handler is registered for `name`.
    #[inline]
    #[must_use]
    pub fn supports(&self, name: &str) -> bool {
        self.dispatcher.contains(name)
    }

    /// Returns the registered command names in no particular order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.dispatcher.commands()
    }
}

// ============================================================================
// Driver - Execution
// ============================================================================

impl Driver {
    /// Executes one command.
    pub async fn execute(&self, request: &Request) -> Response {
        let span = info_span!(
            "command",
            name = %request.name,
            session_id = ?request.session_id,
        );

        self.dispatcher
            .dispatch(&request.name, self.sessions.as_ref(), &request.parameters)
            .instrument(span)
            .await
    }

    /// Decodes a JSON request, executes it and returns the response body.
    ///
    /// Undecodable input yields an `invalid argument` body.
    pub async fn execute_json(&self, text: &str) -> Value {
        let response = match Request::from_json(text) {
            Ok(request) => self.execute(&request).await,
            Err(e) => {
                warn!(error = %e, "Rejected malformed request");
                Response::error(e.status(), e.to_string())
            }
        };
        response.to_json()
    }
}

// ============================================================================
// Tests
// ============================================================================
