//! In-memory browser for exercising handlers without a native window.
//!
//! [`MemoryBrowser`] keeps one scripted modal dialog and records every
//! interaction with it. Dialogs can be made to appear after a delay on the
//! tokio clock, be closed from outside, or close part-way through typing,
//! which covers the timing windows a real UI thread opens up.
//!
//! # Example
//!
//! ```ignore
//! let browser = Arc::new(MemoryBrowser::new());
//! browser.open_dialog_after(DialogKind::Prompt, "Name?", Duration::from_millis(80));
//!
//! let sessions = MemorySessionAccessor::new(Arc::clone(&browser));
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::num::NonZeroU64;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::trace;

use crate::error::{Error, ErrorStatus, Result};
use crate::identifiers::{DialogHandle, SessionId};

use super::{Browser, DialogButton, DialogKind, SessionAccessor};

// ============================================================================
// Types
// ============================================================================

/// How a recorded dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// OK was pressed.
    Accepted,
    /// Cancel was pressed.
    Dismissed,
    /// The application closed it.
    ClosedExternally,
}

/// A dialog that is no longer open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedDialog {
    /// Handle the dialog had.
    pub handle: DialogHandle,
    /// Dialog kind.
    pub kind: DialogKind,
    /// Dialog message, if it showed one.
    pub message: Option<String>,
    /// Text box contents when it closed.
    pub input: String,
    /// How it closed.
    pub outcome: DialogOutcome,
}

struct OpenDialog {
    handle: DialogHandle,
    kind: DialogKind,
    message: Option<String>,
    input: String,
    visible_at: Instant,
}

struct MemoryState {
    next_handle: NonZeroU64,
    dialog: Option<OpenDialog>,
    close_after_chars: Option<usize>,
    close_once_located: bool,
    lookups: usize,
    typed: Vec<String>,
    closed: Vec<ClosedDialog>,
}

impl MemoryState {
    fn open(&self, handle: DialogHandle, operation: &'static str) -> Result<&OpenDialog> {
        self.dialog
            .as_ref()
            .filter(|dialog| dialog.handle == handle)
            .ok_or_else(|| Error::dialog_closed(handle, operation))
    }

    fn close(&mut self, outcome: DialogOutcome) -> Option<DialogHandle> {
        let dialog = self.dialog.take()?;
        trace!(handle = %dialog.handle, ?outcome, "Dialog closed");
        self.closed.push(ClosedDialog {
            handle: dialog.handle,
            kind: dialog.kind,
            message: dialog.message,
            input: dialog.input,
            outcome,
        });
        Some(dialog.handle)
    }
}

// ============================================================================
// MemoryBrowser
// ============================================================================

/// Scripted [`Browser`] holding at most one modal dialog.
pub struct MemoryBrowser {
    session_id: SessionId,
    state: Mutex<MemoryState>,
}

impl Default for MemoryBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBrowser {
    /// Creates a browser with no dialog open.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_id: SessionId::generate(),
            state: Mutex::new(MemoryState {
                next_handle: NonZeroU64::MIN.saturating_add(0x1000),
                dialog: None,
                close_after_chars: None,
                close_once_located: false,
                lookups: 0,
                typed: Vec::new(),
                closed: Vec::new(),
            }),
        }
    }

    /// Opens a dialog that is visible immediately.
    pub fn open_dialog(&self, kind: DialogKind, message: impl Into<String>) -> DialogHandle {
        self.open_dialog_after(kind, message, Duration::ZERO)
    }

    /// Opens a dialog that becomes visible after `delay` on the tokio clock.
    ///
    /// A dialog that is already open is closed externally first.
    pub fn open_dialog_after(
        &self,
        kind: DialogKind,
        message: impl Into<String>,
        delay: Duration,
    ) -> DialogHandle {
        self.open(kind, Some(message.into()), delay)
    }

    /// Opens a visible dialog that shows no message text.
    pub fn open_dialog_without_message(&self, kind: DialogKind) -> DialogHandle {
        self.open(kind, None, Duration::ZERO)
    }

    fn open(&self, kind: DialogKind, message: Option<String>, delay: Duration) -> DialogHandle {
        let mut state = self.state.lock();
        state.close(DialogOutcome::ClosedExternally);

        state.next_handle = state.next_handle.saturating_add(1);
        let handle = DialogHandle::from(state.next_handle);
        state.dialog = Some(OpenDialog {
            handle,
            kind,
            message,
            input: String::new(),
            visible_at: Instant::now() + delay,
        });
        handle
    }

    /// Closes the open dialog as the application would.
    ///
    /// Returns `false` if no dialog was open.
    pub fn close_dialog(&self) -> bool {
        self.state
            .lock()
            .close(DialogOutcome::ClosedExternally)
            .is_some()
    }

    /// Makes the next typing call close the dialog after `count` characters.
    pub fn close_after_chars(&self, count: usize) {
        self.state.lock().close_after_chars = Some(count);
    }

    /// Makes the next probe that finds the dialog close it right after
    /// reporting it, as if the application dismissed it in between.
    pub fn close_once_located(&self) {
        self.state.lock().close_once_located = true;
    }

    /// Returns the open dialog's handle, visible or not, without probing.
    #[must_use]
    pub fn current_handle(&self) -> Option<DialogHandle> {
        self.state.lock().dialog.as_ref().map(|dialog| dialog.handle)
    }

    /// Returns the open dialog's text box contents.
    #[must_use]
    pub fn dialog_input(&self) -> Option<String> {
        self.state
            .lock()
            .dialog
            .as_ref()
            .map(|dialog| dialog.input.clone())
    }

    /// Returns how many times [`Browser::active_dialog`] was probed.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.state.lock().lookups
    }

    /// Returns the text of every typing call, in order.
    #[must_use]
    pub fn typed(&self) -> Vec<String> {
        self.state.lock().typed.clone()
    }

    /// Returns every dialog closed so far, oldest first.
    #[must_use]
    pub fn closed_dialogs(&self) -> Vec<ClosedDialog> {
        self.state.lock().closed.clone()
    }
}

#[async_trait]
impl Browser for MemoryBrowser {
    fn session_id(&self) -> SessionId {
        self.session_id
    }

    async fn active_dialog(&self) -> Option<DialogHandle> {
        let mut state = self.state.lock();
        state.lookups += 1;

        let now = Instant::now();
        let handle = state
            .dialog
            .as_ref()
            .filter(|dialog| dialog.visible_at <= now)
            .map(|dialog| dialog.handle)?;

        if std::mem::take(&mut state.close_once_located) {
            state.close(DialogOutcome::ClosedExternally);
        }
        Some(handle)
    }

    async fn dialog_kind(&self, handle: DialogHandle) -> Result<DialogKind> {
        let state = self.state.lock();
        state.open(handle, "kind lookup").map(|dialog| dialog.kind)
    }

    async fn dialog_text(&self, handle: DialogHandle) -> Result<Option<String>> {
        let state = self.state.lock();
        state
            .open(handle, "text lookup")
            .map(|dialog| dialog.message.clone())
    }

    async fn type_into_dialog(&self, handle: DialogHandle, text: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.open(handle, "send keys")?;
        state.typed.push(text.to_string());

        let total = text.chars().count();
        let cut = state.close_after_chars.take().filter(|&count| count < total);

        if let Some(dialog) = state.dialog.as_mut() {
            dialog
                .input
                .extend(text.chars().take(cut.unwrap_or(total)));
        }

        match cut {
            Some(_) => {
                state.close(DialogOutcome::ClosedExternally);
                Err(Error::dialog_closed(handle, "send keys"))
            }
            None => Ok(()),
        }
    }

    async fn press_dialog_button(&self, handle: DialogHandle, button: DialogButton) -> Result<()> {
        let mut state = self.state.lock();
        let kind = state.open(handle, "button press")?.kind;

        let outcome = match button {
            DialogButton::Ok => DialogOutcome::Accepted,
            DialogButton::Cancel if kind.has_cancel() => DialogOutcome::Dismissed,
            DialogButton::Cancel => {
                return Err(Error::protocol(format!("{kind} dialog has no Cancel button")));
            }
        };

        state.close(outcome);
        Ok(())
    }
}

// ============================================================================
// MemorySessionAccessor
// ============================================================================

/// [`SessionAccessor`] resolving to a fixed browser or a fixed failure.
pub struct MemorySessionAccessor {
    target: std::result::Result<Arc<MemoryBrowser>, (ErrorStatus, String)>,
    resolutions: AtomicUsize,
}

impl MemorySessionAccessor {
    /// Creates an accessor that always resolves to `browser`.
    #[must_use]
    pub fn new(browser: Arc<MemoryBrowser>) -> Self {
        Self {
            target: Ok(browser),
            resolutions: AtomicUsize::new(0),
        }
    }

    /// Creates an accessor that always fails with `status`.
    #[must_use]
    pub fn failing(status: ErrorStatus, message: impl Into<String>) -> Self {
        Self {
            target: Err((status, message.into())),
            resolutions: AtomicUsize::new(0),
        }
    }

    /// Returns how many times the current browser was requested.
    #[must_use]
    pub fn resolve_count(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionAccessor for MemorySessionAccessor {
    async fn current_browser(&self) -> Result<Arc<dyn Browser>> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);

        match &self.target {
            Ok(browser) => Ok(Arc::clone(browser) as Arc<dyn Browser>),
            Err((status, message)) => Err(Error::with_status(*status, message.clone())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_delayed_dialog_is_hidden_until_due() {
        let browser = MemoryBrowser::new();
        let handle =
            browser.open_dialog_after(DialogKind::Alert, "x", Duration::from_millis(100));

        assert_eq!(browser.active_dialog().await, None);
        tokio::time::advance(Duration::from_millis(100)).await;
        assert_eq!(browser.active_dialog().await, Some(handle));
        assert_eq!(browser.lookup_count(), 2);
    }

    #[tokio::test]
    async fn test_typing_appends() {
        let browser = MemoryBrowser::new();
        let handle = browser.open_dialog(DialogKind::Prompt, "?");

        browser.type_into_dialog(handle, "ab").await.expect("type");
        browser.type_into_dialog(handle, "c").await.expect("type");

        assert_eq!(browser.dialog_input().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_close_after_chars_keeps_partial_input() {
        let browser = MemoryBrowser::new();
        let handle = browser.open_dialog(DialogKind::Prompt, "?");
        browser.close_after_chars(2);

        let result = browser.type_into_dialog(handle, "hello").await;

        assert!(matches!(result, Err(Error::DialogClosed { .. })));
        let closed = browser.closed_dialogs();
        assert_eq!(closed[0].input, "he");
        assert_eq!(closed[0].outcome, DialogOutcome::ClosedExternally);
    }

    #[tokio::test]
    async fn test_close_after_chars_beyond_text_is_consumed() {
        let browser = MemoryBrowser::new();
        let handle = browser.open_dialog(DialogKind::Prompt, "?");
        browser.close_after_chars(10);

        browser.type_into_dialog(handle, "hi").await.expect("type");
        browser.type_into_dialog(handle, "!").await.expect("type");

        assert_eq!(browser.dialog_input().as_deref(), Some("hi!"));
    }

    #[tokio::test]
    async fn test_dialog_without_message() {
        let browser = MemoryBrowser::new();
        let handle = browser.open_dialog_without_message(DialogKind::BeforeUnload);

        assert_eq!(browser.dialog_text(handle).await.expect("text"), None);
    }

    #[tokio::test]
    async fn test_close_once_located_reports_then_closes() {
        let browser = MemoryBrowser::new();
        let handle = browser.open_dialog(DialogKind::Prompt, "?");
        browser.close_once_located();

        assert_eq!(browser.active_dialog().await, Some(handle));
        assert!(browser.current_handle().is_none());
        assert!(matches!(
            browser.type_into_dialog(handle, "x").await,
            Err(Error::DialogClosed { .. })
        ));
        assert_eq!(browser.active_dialog().await, None);
    }

    #[tokio::test]
    async fn test_stale_handle_after_reopen() {
        let browser = MemoryBrowser::new();
        let first = browser.open_dialog(DialogKind::Alert, "one");
        let second = browser.open_dialog(DialogKind::Alert, "two");

        assert_ne!(first, second);
        assert!(browser.dialog_kind(first).await.is_err());
        assert_eq!(
            browser.dialog_kind(second).await.expect("kind"),
            DialogKind::Alert
        );
    }

    #[tokio::test]
    async fn test_cancel_on_alert_is_rejected() {
        let browser = MemoryBrowser::new();
        let handle = browser.open_dialog(DialogKind::Alert, "x");

        let result = browser
            .press_dialog_button(handle, DialogButton::Cancel)
            .await;

        assert!(result.is_err());
        assert_eq!(browser.current_handle(), Some(handle));
    }

    #[tokio::test]
    async fn test_failing_accessor() {
        let sessions = MemorySessionAccessor::failing(ErrorStatus::NoSuchWindow, "closed");

        let err = sessions.current_browser().await.err().expect("failure");

        assert_eq!(err.status(), ErrorStatus::NoSuchWindow);
        assert_eq!(sessions.resolve_count(), 1);
    }
}
