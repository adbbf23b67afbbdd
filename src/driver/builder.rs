//! Builder pattern for driver configuration.
//!
//! Provides a fluent API for configuring and creating [`Driver`] instances.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use native_webdriver::{Driver, MemoryBrowser, MemorySessionAccessor};
//!
//! # fn example() -> native_webdriver::Result<()> {
//! let browser = Arc::new(MemoryBrowser::new());
//! let driver = Driver::builder()
//!     .sessions(MemorySessionAccessor::new(browser))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::browser::SessionAccessor;
use crate::error::{Error, Result};
use crate::handler::{CommandDispatcher, CommandHandler};

use super::core::Driver;
use super::options::DriverOptions;

// ============================================================================
// DriverBuilder
// ============================================================================

/// Builder for configuring a [`Driver`] instance.
///
/// Use [`Driver::builder()`] to create a new builder.
#[derive(Default)]
pub struct DriverBuilder {
    /// Timing options.
    options: DriverOptions,
    /// Session accessor.
    sessions: Option<Arc<dyn SessionAccessor>>,
    /// Extra handlers, registered after the built-in ones.
    handlers: Vec<(String, Box<dyn CommandHandler>)>,
}

impl fmt::Debug for DriverBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverBuilder")
            .field("options", &self.options)
            .field("has_sessions", &self.sessions.is_some())
            .field(
                "handlers",
                &self.handlers.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

// ============================================================================
// DriverBuilder Implementation
// ============================================================================

impl DriverBuilder {
    /// Creates a new driver builder with default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timing options.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: DriverOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the accessor used to resolve the current browser.
    #[inline]
    #[must_use]
    pub fn sessions(mut self, sessions: impl SessionAccessor + 'static) -> Self {
        self.sessions = Some(Arc::new(sessions));
        self
    }

    /// Sets a shared session accessor.
    #[inline]
    #[must_use]
    pub fn shared_sessions(mut self, sessions: Arc<dyn SessionAccessor>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    /// Registers an additional command handler.
    ///
    /// A handler registered under a built-in command name replaces it.
    #[must_use]
    pub fn handler(
        mut self,
        name: impl Into<String>,
        handler: impl CommandHandler + 'static,
    ) -> Self {
        self.handlers.push((name.into(), Box::new(handler)));
        self
    }

    /// Builds the driver.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no session accessor was set or the
    /// options are invalid.
    pub fn build(self) -> Result<Driver> {
        self.options.validate().map_err(Error::config)?;

        let sessions = self
            .sessions
            .ok_or_else(|| Error::config("Session accessor is required"))?;

        let mut dispatcher = CommandDispatcher::with_alert_handlers(self.options.dialog_locator());
        for (name, handler) in self.handlers {
            dispatcher.register_boxed(name, handler);
        }

        Ok(Driver::new(dispatcher, sessions, self.options))
    }
}

// ============================================================================
// Tests
// ============================================================================
