//! Driver timing options.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use native_webdriver::DriverOptions;
//!
//! let options = DriverOptions::new()
//!     .with_dialog_poll_interval(Duration::from_millis(25))
//!     .with_dialog_timeout(Duration::from_secs(2));
//!
//! options.validate()?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use crate::browser::DialogLocator;
use crate::wait::PollPolicy;

// ============================================================================
// Constants
// ============================================================================

/// Default interval between dialog probes.
pub const DEFAULT_DIALOG_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Default total time to wait for a dialog.
pub const DEFAULT_DIALOG_TIMEOUT: Duration = Duration::from_millis(1000);

/// Longest dialog wait `validate` accepts.
pub const MAX_DIALOG_TIMEOUT: Duration = Duration::from_secs(300);

// ============================================================================
// DriverOptions
// ============================================================================

/// Driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverOptions {
    /// Interval between dialog probes.
    pub dialog_poll_interval: Duration,

    /// Total time to wait for a dialog before reporting `no such alert`.
    pub dialog_timeout: Duration,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl DriverOptions {
    /// Creates options with default timings.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dialog_poll_interval: DEFAULT_DIALOG_POLL_INTERVAL,
            dialog_timeout: DEFAULT_DIALOG_TIMEOUT,
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl DriverOptions {
    /// Sets the interval between dialog probes.
    #[inline]
    #[must_use]
    pub fn with_dialog_poll_interval(mut self, interval: Duration) -> Self {
        self.dialog_poll_interval = interval;
        self
    }

    /// Sets the total dialog wait.
    #[inline]
    #[must_use]
    pub fn with_dialog_timeout(mut self, timeout: Duration) -> Self {
        self.dialog_timeout = timeout;
        self
    }
}

// ============================================================================
// Conversion Methods
// ============================================================================

impl DriverOptions {
    /// Returns the poll policy for dialog lookups.
    #[inline]
    #[must_use]
    pub fn dialog_poll_policy(&self) -> PollPolicy {
        PollPolicy::new(self.dialog_poll_interval, self.dialog_timeout)
    }

    /// Returns a dialog locator using these timings.
    #[inline]
    #[must_use]
    pub fn dialog_locator(&self) -> DialogLocator {
        DialogLocator::new(self.dialog_poll_policy())
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.dialog_poll_interval.is_zero() {
            return Err("Dialog poll interval must be greater than zero".to_string());
        }
        if self.dialog_timeout > MAX_DIALOG_TIMEOUT {
            return Err(format!(
                "Dialog timeout ({}ms) exceeds maximum ({}ms)",
                self.dialog_timeout.as_millis(),
                MAX_DIALOG_TIMEOUT.as_millis()
            ));
        }
        if self.dialog_poll_interval > self.dialog_timeout {
            return Err(format!(
                "Dialog poll interval ({}ms) exceeds dialog timeout ({}ms)",
                self.dialog_poll_interval.as_millis(),
                self.dialog_timeout.as_millis()
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
