//! Resolution of the browser a command runs against.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

use super::Browser;

// ============================================================================
// SessionAccessor
// ============================================================================

/// Resolves the currently active browser for a dispatch context.
///
/// Session lifecycle lives outside this crate; handlers only borrow the
/// browser for the duration of one command. Failures should carry the status
/// the client is to receive, typically via
/// [`Error::with_status`](crate::Error::with_status).
#[async_trait]
pub trait SessionAccessor: Send + Sync {
    /// Returns the current browser.
    async fn current_browser(&self) -> Result<Arc<dyn Browser>>;
}

#[async_trait]
impl<T: SessionAccessor + ?Sized> SessionAccessor for Arc<T> {
    async fn current_browser(&self) -> Result<Arc<dyn Browser>> {
        (**self).current_browser().await
    }
}
