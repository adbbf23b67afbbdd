//! Alert bound to one open modal dialog.
//!
//! An [`Alert`] is built per command from a located [`DialogHandle`] and
//! dropped when the command finishes. Its operations go straight to the
//! native dialog; nothing is cached across calls.
//!
//! # Example
//!
//! ```ignore
//! let handle = locator.locate(browser.as_ref()).await.ok_or_else(|| ...)?;
//! let alert = Alert::new(browser, handle);
//! alert.send_keys("John").await?;
//! alert.accept().await?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::identifiers::DialogHandle;

use super::{Browser, DialogButton, DialogKind};

// ============================================================================
// Alert
// ============================================================================

/// A modal dialog bound to the browser that shows it.
pub struct Alert {
    browser: Arc<dyn Browser>,
    handle: DialogHandle,
}

impl fmt::Debug for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alert")
            .field("session_id", &self.browser.session_id())
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl Alert {
    /// Binds an alert to a located dialog.
    #[inline]
    #[must_use]
    pub fn new(browser: Arc<dyn Browser>, handle: DialogHandle) -> Self {
        Self { browser, handle }
    }

    /// Returns the dialog kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DialogClosed`] if the dialog is gone.
    pub async fn kind(&self) -> Result<DialogKind> {
        self.browser.dialog_kind(self.handle).await
    }

    /// Returns the dialog's message text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DialogClosed`] if the dialog is gone.
    pub async fn text(&self) -> Result<Option<String>> {
        self.browser.dialog_text(self.handle).await
    }

    /// Types `text` into the dialog's text box.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedAlertOperation`] if the dialog has no text box
    /// - [`Error::DialogClosed`] if the dialog closes before or while typing;
    ///   characters typed before it closed are not rolled back
    pub async fn send_keys(&self, text: &str) -> Result<()> {
        let kind = self.kind().await?;
        if !kind.has_text_input() {
            return Err(Error::unsupported_alert_operation(kind));
        }

        debug!(handle = %self.handle, len = text.chars().count(), "Typing into dialog");
        self.browser.type_into_dialog(self.handle, text).await
    }

    /// Presses OK.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DialogClosed`] if the dialog is gone.
    pub async fn accept(&self) -> Result<()> {
        debug!(handle = %self.handle, "Accepting dialog");
        self.browser
            .press_dialog_button(self.handle, DialogButton::Ok)
            .await
    }

    /// Presses Cancel, or OK when the dialog has no Cancel button.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DialogClosed`] if the dialog is gone.
    pub async fn dismiss(&self) -> Result<()> {
        let button = if self.kind().await?.has_cancel() {
            DialogButton::Cancel
        } else {
            DialogButton::Ok
        };

        debug!(handle = %self.handle, ?button, "Dismissing dialog");
        self.browser.press_dialog_button(self.handle, button).await
    }
}

// ============================================================================
// Tests
// ============================================================================
