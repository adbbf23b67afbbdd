//! Modal dialog kinds and the bounded dialog locator.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::identifiers::DialogHandle;
use crate::wait::{PollPolicy, duration_millis, poll_until};

use super::Browser;

// ============================================================================
// DialogKind
// ============================================================================

/// Kind of a native modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogKind {
    /// `window.alert()`: message and OK button.
    Alert,
    /// `window.confirm()`: message, OK and Cancel.
    Confirm,
    /// `window.prompt()`: message, text box, OK and Cancel.
    Prompt,
    /// Leave-page confirmation: Leave (OK) and Stay (Cancel).
    BeforeUnload,
}

impl DialogKind {
    /// Returns `true` if the dialog has a text box.
    #[inline]
    #[must_use]
    pub const fn has_text_input(self) -> bool {
        matches!(self, Self::Prompt)
    }

    /// Returns `true` if the dialog has a Cancel button.
    #[inline]
    #[must_use]
    pub const fn has_cancel(self) -> bool {
        !matches!(self, Self::Alert)
    }

    /// Returns the protocol name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Confirm => "confirm",
            Self::Prompt => "prompt",
            Self::BeforeUnload => "beforeUnload",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// DialogButton
// ============================================================================

/// A button on a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogButton {
    /// OK / Leave.
    Ok,
    /// Cancel / Stay.
    Cancel,
}

// ============================================================================
// DialogLocator
// ============================================================================

/// Waits a bounded time for a modal dialog to become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLocator {
    policy: PollPolicy,
}

impl DialogLocator {
    /// Creates a locator with the given poll policy.
    #[inline]
    #[must_use]
    pub const fn new(policy: PollPolicy) -> Self {
        Self { policy }
    }

    /// Returns the poll policy.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> PollPolicy {
        self.policy
    }

    /// Polls `browser` until a dialog is open or the budget runs out.
    pub async fn locate(&self, browser: &dyn Browser) -> Option<DialogHandle> {
        let handle = poll_until(self.policy, || browser.active_dialog()).await;

        match handle {
            Some(handle) => debug!(session_id = %browser.session_id(), %handle, "Dialog located"),
            None => debug!(
                session_id = %browser.session_id(),
                timeout_ms = duration_millis(self.policy.timeout()),
                "No dialog within wait budget"
            ),
        }

        handle
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::browser::memory::MemoryBrowser;

    fn locator() -> DialogLocator {
        DialogLocator::new(PollPolicy::new(
            Duration::from_millis(50),
            Duration::from_millis(500),
        ))
    }

    #[test]
    fn test_capabilities_by_kind() {
        assert!(!DialogKind::Alert.has_text_input());
        assert!(!DialogKind::Alert.has_cancel());
        assert!(DialogKind::Confirm.has_cancel());
        assert!(DialogKind::Prompt.has_text_input());
        assert!(DialogKind::BeforeUnload.has_cancel());
        assert!(!DialogKind::BeforeUnload.has_text_input());
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&DialogKind::BeforeUnload).expect("serialize");
        assert_eq!(json, "\"beforeUnload\"");
        assert_eq!(DialogKind::Prompt.to_string(), "prompt");
    }

    #[tokio::test(start_paused = true)]
    async fn test_locate_open_dialog() {
        let browser = MemoryBrowser::new();
        let opened = browser.open_dialog(DialogKind::Alert, "hello");

        assert_eq!(locator().locate(&browser).await, Some(opened));
        assert_eq!(browser.lookup_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_locate_waits_for_late_dialog() {
        let browser = MemoryBrowser::new();
        let opened =
            browser.open_dialog_after(DialogKind::Prompt, "name?", Duration::from_millis(120));

        assert_eq!(locator().locate(&browser).await, Some(opened));
        // t = 0, 50, 100, 150
        assert_eq!(browser.lookup_count(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_locate_gives_up_after_budget() {
        let browser = MemoryBrowser::new();
        browser.open_dialog_after(DialogKind::Alert, "late", Duration::from_millis(501));

        assert_eq!(locator().locate(&browser).await, None);
        assert_eq!(browser.lookup_count(), 11);
    }
}
