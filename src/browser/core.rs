//! Native browser surface consumed by command handlers.

use async_trait::async_trait;

use crate::error::Result;
use crate::identifiers::{DialogHandle, SessionId};

use super::dialog::{DialogButton, DialogKind};

// ============================================================================
// Browser
// ============================================================================

/// One automation target as seen from the command context.
///
/// Implementations wrap the native window of the browser process. All dialog
/// operations take the handle returned by [`Browser::active_dialog`] and fail
/// with [`Error::DialogClosed`](crate::Error::DialogClosed) once that dialog
/// is gone.
#[async_trait]
pub trait Browser: Send + Sync {
    /// Returns the session this browser belongs to.
    fn session_id(&self) -> SessionId;

    /// Probes once for the currently open modal dialog.
    ///
    /// A dialog that was just triggered may not be visible yet; use a
    /// [`DialogLocator`](super::DialogLocator) to wait for it.
    async fn active_dialog(&self) -> Option<DialogHandle>;

    /// Returns what kind of dialog the handle refers to.
    async fn dialog_kind(&self, handle: DialogHandle) -> Result<DialogKind>;

    /// Returns the dialog's message text, if it shows one.
    async fn dialog_text(&self, handle: DialogHandle) -> Result<Option<String>>;

    /// Types `text` into the dialog's text box.
    ///
    /// Callers check [`DialogKind::has_text_input`] first.
    async fn type_into_dialog(&self, handle: DialogHandle, text: &str) -> Result<()>;

    /// Presses one of the dialog's buttons, closing it.
    async fn press_dialog_button(&self, handle: DialogHandle, button: DialogButton) -> Result<()>;
}
