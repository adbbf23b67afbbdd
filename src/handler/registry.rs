//! Command name → handler registry.
//!
//! [`CommandDispatcher`] owns one boxed handler per command name and is the
//! failure boundary of command execution: whatever a handler does, the
//! caller gets back a populated [`Response`].

// ============================================================================
// Imports
// ============================================================================

use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use rustc_hash::FxHashMap;
use tracing::{debug, error, warn};

use crate::browser::{DialogLocator, SessionAccessor};
use crate::error::{Error, ErrorStatus};
use crate::protocol::{AlertCommand, ParameterMap, Response};

use super::{
    AcceptAlertHandler, CommandHandler, DismissAlertHandler, GetAlertTextHandler,
    SendKeysToAlertHandler,
};

// ============================================================================
// CommandDispatcher
// ============================================================================

/// Routes commands to handlers by name.
#[derive(Default)]
pub struct CommandDispatcher {
    handlers: FxHashMap<String, Box<dyn CommandHandler>>,
}

impl fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CommandDispatcher")
            .field("commands", &names)
            .finish()
    }
}

impl CommandDispatcher {
    /// Creates an empty dispatcher.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher with every alert command registered.
    #[must_use]
    pub fn with_alert_handlers(locator: DialogLocator) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register_alert_handlers(locator);
        dispatcher
    }

    /// Registers the alert commands, sharing one dialog locator.
    pub fn register_alert_handlers(&mut self, locator: DialogLocator) {
        for command in AlertCommand::ALL {
            let handler: Box<dyn CommandHandler> = match command {
                AlertCommand::GetAlertText => Box::new(GetAlertTextHandler::new(locator)),
                AlertCommand::SendKeysToAlert => Box::new(SendKeysToAlertHandler::new(locator)),
                AlertCommand::AcceptAlert => Box::new(AcceptAlertHandler::new(locator)),
                AlertCommand::DismissAlert => Box::new(DismissAlertHandler::new(locator)),
            };
            self.register_boxed(command.as_str(), handler);
        }
    }

    /// Registers `handler` under `name`, replacing any previous handler.
    pub fn register(&mut self, name: impl Into<String>, handler: impl CommandHandler + 'static) {
        self.register_boxed(name, Box::new(handler));
    }

    /// Registers an already boxed handler.
    pub fn register_boxed(&mut self, name: impl Into<String>, handler: Box<dyn CommandHandler>) {
        let name = name.into();
        if self.handlers.insert(name.clone(), handler).is_some() {
            warn!(command = %name, "Replaced existing command handler");
        }
    }

    /// Returns `true` if a handler is registered for `name`.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns the number of registered commands.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no commands are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns the registered command names in no particular order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Runs the handler registered for `name`.
    ///
    /// Never fails: unknown names, handler panics and handlers that leave
    /// the response unset all produce an error response.
    pub async fn dispatch(
        &self,
        name: &str,
        sessions: &dyn SessionAccessor,
        params: &ParameterMap,
    ) -> Response {
        let Some(handler) = self.handlers.get(name) else {
            warn!(command = %name, "No handler registered");
            let err = Error::unknown_command(name);
            return Response::error(err.status(), err.to_string());
        };

        debug!(command = %name, "Dispatching command");

        let mut response = Response::new();
        let outcome = AssertUnwindSafe(handler.execute_internal(sessions, params, &mut response))
            .catch_unwind()
            .await;

        match outcome {
            Ok(()) if response.is_set() => {
                debug!(
                    command = %name,
                    status = response.status().map_or("success", ErrorStatus::as_str),
                    "Command finished"
                );
                response
            }
            Ok(()) => {
                error!(command = %name, "Handler returned without a response");
                Response::error(ErrorStatus::UnknownError, "Command produced no response")
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!(command = %name, %message, "Handler panicked");
                Response::error(
                    ErrorStatus::UnknownError,
                    format!("Unexpected failure in {name}: {message}"),
                )
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "panic"
    }
}

// ============================================================================
// Tests
// ============================================================================
