//! Handlers for commands acting on the current modal dialog.
//!
//! All four handlers follow the same path: validate parameters, resolve the
//! current browser, wait (bounded) for a dialog, bind an [`Alert`], then
//! invoke exactly one capability on it. Each step that fails ends the
//! command with its own error status:
//!
//! | Step | Failure | Status |
//! |------|---------|--------|
//! | Parameters | missing or malformed `value` | `invalid argument` |
//! | Session | accessor failed | propagated unchanged |
//! | Dialog | none within the wait budget | `no such alert` |
//! | Capability | dialog has no text box | `unsupported operation` |

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;

use crate::browser::{Alert, DialogLocator, SessionAccessor};
use crate::error::{Error, Result};
use crate::protocol::{ParameterMap, Response};

use super::CommandHandler;

// ============================================================================
// Constants
// ============================================================================

/// Parameter holding the keys to type.
const VALUE_PARAMETER: &str = "value";

// ============================================================================
// Shared Steps
// ============================================================================

/// Resolves the current browser and binds an alert to its open dialog.
async fn bind_alert(sessions: &dyn SessionAccessor, locator: &DialogLocator) -> Result<Alert> {
    let browser = sessions
        .current_browser()
        .await
        .map_err(|e| Error::session_unavailable(&e))?;

    let handle = locator.locate(browser.as_ref()).await.ok_or_else(|| {
        Error::no_such_alert(format!(
            "no dialog appeared within {}ms",
            locator.policy().timeout().as_millis()
        ))
    })?;

    Ok(Alert::new(browser, handle))
}

// ============================================================================
// SendKeysToAlertHandler
// ============================================================================

/// `sendKeysToAlert`: types into a prompt's text box.
#[derive(Debug, Clone, Copy)]
pub struct SendKeysToAlertHandler {
    locator: DialogLocator,
}

impl SendKeysToAlertHandler {
    /// Creates the handler.
    #[inline]
    #[must_use]
    pub const fn new(locator: DialogLocator) -> Self {
        Self { locator }
    }

    async fn send_keys(
        &self,
        sessions: &dyn SessionAccessor,
        params: &ParameterMap,
    ) -> Result<Value> {
        let text = params.character_sequence(VALUE_PARAMETER)?;
        let alert = bind_alert(sessions, &self.locator).await?;
        alert.send_keys(&text).await?;
        Ok(Value::Null)
    }
}

#[async_trait]
impl CommandHandler for SendKeysToAlertHandler {
    async fn execute_internal(
        &self,
        sessions: &dyn SessionAccessor,
        params: &ParameterMap,
        response: &mut Response,
    ) {
        response.set_result(self.send_keys(sessions, params).await);
    }
}

// ============================================================================
// GetAlertTextHandler
// ============================================================================

/// `getAlertText`: returns the dialog message, or `null`.
#[derive(Debug, Clone, Copy)]
pub struct GetAlertTextHandler {
    locator: DialogLocator,
}

impl GetAlertTextHandler {
    /// Creates the handler.
    #[inline]
    #[must_use]
    pub const fn new(locator: DialogLocator) -> Self {
        Self { locator }
    }
}

#[async_trait]
impl CommandHandler for GetAlertTextHandler {
    async fn execute_internal(
        &self,
        sessions: &dyn SessionAccessor,
        _params: &ParameterMap,
        response: &mut Response,
    ) {
        let result = async {
            let alert = bind_alert(sessions, &self.locator).await?;
            Ok::<_, Error>(alert.text().await?.map_or(Value::Null, Value::String))
        };
        response.set_result(result.await);
    }
}

// ============================================================================
// AcceptAlertHandler
// ============================================================================

/// `acceptAlert`: presses OK.
#[derive(Debug, Clone, Copy)]
pub struct AcceptAlertHandler {
    locator: DialogLocator,
}

impl AcceptAlertHandler {
    /// Creates the handler.
    #[inline]
    #[must_use]
    pub const fn new(locator: DialogLocator) -> Self {
        Self { locator }
    }
}

#[async_trait]
impl CommandHandler for AcceptAlertHandler {
    async fn execute_internal(
        &self,
        sessions: &dyn SessionAccessor,
        _params: &ParameterMap,
        response: &mut Response,
    ) {
        let result = async {
            bind_alert(sessions, &self.locator).await?.accept().await?;
            Ok::<_, Error>(Value::Null)
        };
        response.set_result(result.await);
    }
}

// ============================================================================
// DismissAlertHandler
// ============================================================================

/// `dismissAlert`: presses Cancel, or OK on a plain alert.
#[derive(Debug, Clone, Copy)]
pub struct DismissAlertHandler {
    locator: DialogLocator,
}

impl DismissAlertHandler {
    /// Creates the handler.
    #[inline]
    #[must_use]
    pub const fn new(locator: DialogLocator) -> Self {
        Self { locator }
    }
}

#[async_trait]
impl CommandHandler for DismissAlertHandler {
    async fn execute_internal(
        &self,
        sessions: &dyn SessionAccessor,
        _params: &ParameterMap,
        response: &mut Response,
    ) {
        let result = async {
            bind_alert(sessions, &self.locator).await?.dismiss().await?;
            Ok::<_, Error>(Value::Null)
        };
        response.set_result(result.await);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::json;

    use crate::browser::{DialogKind, DialogOutcome, MemoryBrowser, MemorySessionAccessor};
    use crate::error::ErrorStatus;
    use crate::wait::PollPolicy;

    fn locator() -> DialogLocator {
        DialogLocator::new(PollPolicy::new(
            Duration::from_millis(100),
            Duration::from_millis(1000),
        ))
    }

    fn fixture() -> (Arc<MemoryBrowser>, MemorySessionAccessor) {
        let browser = Arc::new(MemoryBrowser::new());
        let sessions = MemorySessionAccessor::new(Arc::clone(&browser));
        (browser, sessions)
    }

    async fn run(
        handler: &dyn CommandHandler,
        sessions: &dyn SessionAccessor,
        params: Value,
    ) -> Response {
        let params = ParameterMap::try_from(params).expect("object");
        let mut response = Response::new();
        handler
            .execute_internal(sessions, &params, &mut response)
            .await;
        response
    }

    // ------------------------------------------------------------------------
    // sendKeysToAlert: parameter validation
    // ------------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_missing_value() {
        let (browser, sessions) = fixture();
        browser.open_dialog(DialogKind::Prompt, "Name?");

        let response = run(&SendKeysToAlertHandler::new(locator()), &sessions, json!({})).await;

        assert_eq!(response.status(), Some(ErrorStatus::InvalidArgument));
        assert!(response.message().is_some_and(|m| m.contains("value")));
        assert_eq!(sessions.resolve_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_malformed_value_stops_before_lookup() {
        let (browser, sessions) = fixture();
        browser.open_dialog(DialogKind::Prompt, "Name?");

        for value in [json!("hi"), json!(["hi"]), json!([1]), json!({"a": "b"})] {
            let response = run(
                &SendKeysToAlertHandler::new(locator()),
                &sessions,
                json!({ "value": value }),
            )
            .await;
            assert_eq!(response.status(), Some(ErrorStatus::InvalidArgument));
        }

        assert_eq!(sessions.resolve_count(), 0);
        assert_eq!(browser.lookup_count(), 0);
        assert!(browser.typed().is_empty());
        assert_eq!(browser.dialog_input().as_deref(), Some(""));
    }

    // ------------------------------------------------------------------------
    // sendKeysToAlert: session and dialog resolution
    // ------------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_propagates_session_failure() {
        let sessions = MemorySessionAccessor::failing(ErrorStatus::NoSuchWindow, "window was closed");

        let response = run(
            &SendKeysToAlertHandler::new(locator()),
            &sessions,
            json!({"value": ["h"]}),
        )
        .await;

        assert_eq!(response.status(), Some(ErrorStatus::NoSuchWindow));
        assert_eq!(
            response.message(),
            Some("Unable to get browser: window was closed")
        );
        assert_eq!(sessions.resolve_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_without_dialog() {
        let (browser, sessions) = fixture();

        let response = run(
            &SendKeysToAlertHandler::new(locator()),
            &sessions,
            json!({"value": ["h"]}),
        )
        .await;

        assert_eq!(response.status(), Some(ErrorStatus::NoSuchAlert));
        assert_eq!(browser.lookup_count(), 11);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_dialog_one_tick_after_budget() {
        let (browser, sessions) = fixture();
        browser.open_dialog_after(DialogKind::Prompt, "Name?", Duration::from_millis(1001));

        let response = run(
            &SendKeysToAlertHandler::new(locator()),
            &sessions,
            json!({"value": ["h"]}),
        )
        .await;

        assert_eq!(response.status(), Some(ErrorStatus::NoSuchAlert));
        assert!(browser.typed().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_waits_for_slow_dialog() {
        let (browser, sessions) = fixture();
        browser.open_dialog_after(DialogKind::Prompt, "Name?", Duration::from_millis(950));

        let response = run(
            &SendKeysToAlertHandler::new(locator()),
            &sessions,
            json!({"value": ["o", "k"]}),
        )
        .await;

        assert!(response.is_success());
        assert_eq!(browser.dialog_input().as_deref(), Some("ok"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_with_unrepresentable_wait_budget() {
        let (browser, sessions) = fixture();
        browser.open_dialog(DialogKind::Prompt, "Name?");
        let locator = DialogLocator::new(PollPolicy::new(
            Duration::from_millis(100),
            Duration::MAX,
        ));

        let response = run(
            &SendKeysToAlertHandler::new(locator),
            &sessions,
            json!({"value": ["h", "i"]}),
        )
        .await;

        assert!(response.is_success());
        assert_eq!(browser.dialog_input().as_deref(), Some("hi"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_dialog_closed_after_lookup() {
        let (browser, sessions) = fixture();
        browser.open_dialog(DialogKind::Prompt, "Name?");
        browser.close_once_located();

        let response = run(
            &SendKeysToAlertHandler::new(locator()),
            &sessions,
            json!({"value": ["h", "i"]}),
        )
        .await;

        assert_eq!(response.status(), Some(ErrorStatus::NoSuchAlert));
        assert!(browser.typed().is_empty());
        let closed = browser.closed_dialogs();
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].input, "");
        assert_eq!(closed[0].outcome, DialogOutcome::ClosedExternally);
    }

    // ------------------------------------------------------------------------
    // sendKeysToAlert: capability
    // ------------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_to_plain_alert() {
        let (browser, sessions) = fixture();
        browser.open_dialog(DialogKind::Alert, "Hello");

        let response = run(
            &SendKeysToAlertHandler::new(locator()),
            &sessions,
            json!({"value": ["h"]}),
        )
        .await;

        assert_eq!(response.status(), Some(ErrorStatus::UnsupportedOperation));
        assert!(response.message().is_some_and(|m| m.contains("alert")));
        assert!(browser.typed().is_empty());
        assert!(browser.current_handle().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_success() {
        let (browser, sessions) = fixture();
        browser.open_dialog(DialogKind::Prompt, "Name?");

        let response = run(
            &SendKeysToAlertHandler::new(locator()),
            &sessions,
            json!({"value": ["h", "i"]}),
        )
        .await;

        assert!(response.is_success());
        assert_eq!(response.value(), Some(&Value::Null));
        assert_eq!(browser.typed(), vec!["hi".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_twice_accumulates() {
        let (browser, sessions) = fixture();
        browser.open_dialog(DialogKind::Prompt, "Name?");
        let handler = SendKeysToAlertHandler::new(locator());

        let first = run(&handler, &sessions, json!({"value": ["h", "i"]})).await;
        let second = run(&handler, &sessions, json!({"value": ["!"]})).await;

        assert!(first.is_success());
        assert!(second.is_success());
        assert_eq!(browser.typed(), vec!["hi".to_string(), "!".to_string()]);
        assert_eq!(browser.dialog_input().as_deref(), Some("hi!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_keys_dialog_closed_mid_typing_leaves_partial_input() {
        let (browser, sessions) = fixture();
        browser.open_dialog(DialogKind::Prompt, "Name?");
        browser.close_after_chars(1);

        let response = run(
            &SendKeysToAlertHandler::new(locator()),
            &sessions,
            json!({"value": ["h", "i"]}),
        )
        .await;

        assert_eq!(response.status(), Some(ErrorStatus::NoSuchAlert));
        // Characters typed before the dialog closed are not rolled back.
        let closed = browser.closed_dialogs();
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].input, "h");
        assert_eq!(closed[0].outcome, DialogOutcome::ClosedExternally);
    }

    // ------------------------------------------------------------------------
    // Other alert commands
    // ------------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_get_alert_text() {
        let (browser, sessions) = fixture();
        browser.open_dialog(DialogKind::Confirm, "Delete file?");

        let response = run(&GetAlertTextHandler::new(locator()), &sessions, json!({})).await;

        assert_eq!(response.value(), Some(&json!("Delete file?")));
        assert!(browser.current_handle().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_alert_text_without_message() {
        let (browser, sessions) = fixture();
        browser.open_dialog_without_message(DialogKind::BeforeUnload);

        let response = run(&GetAlertTextHandler::new(locator()), &sessions, json!({})).await;

        assert!(response.is_success());
        assert_eq!(response.value(), Some(&Value::Null));
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_alert_text_without_dialog() {
        let (_browser, sessions) = fixture();

        let response = run(&GetAlertTextHandler::new(locator()), &sessions, json!({})).await;

        assert_eq!(response.status(), Some(ErrorStatus::NoSuchAlert));
    }

    #[tokio::test(start_paused = true)]
    async fn test_accept_alert() {
        let (browser, sessions) = fixture();
        browser.open_dialog(DialogKind::Prompt, "Name?");

        let response = run(&AcceptAlertHandler::new(locator()), &sessions, json!({})).await;

        assert!(response.is_success());
        assert_eq!(browser.closed_dialogs()[0].outcome, DialogOutcome::Accepted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_confirm_and_alert() {
        let (browser, sessions) = fixture();
        let handler = DismissAlertHandler::new(locator());

        browser.open_dialog(DialogKind::Confirm, "Sure?");
        assert!(run(&handler, &sessions, json!({})).await.is_success());

        browser.open_dialog(DialogKind::Alert, "Done");
        assert!(run(&handler, &sessions, json!({})).await.is_success());

        let outcomes: Vec<_> = browser
            .closed_dialogs()
            .into_iter()
            .map(|dialog| dialog.outcome)
            .collect();
        assert_eq!(outcomes, vec![DialogOutcome::Dismissed, DialogOutcome::Accepted]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_accept_propagates_session_failure() {
        let sessions = MemorySessionAccessor::failing(ErrorStatus::InvalidSessionId, "no session");

        let response = run(&AcceptAlertHandler::new(locator()), &sessions, json!({})).await;

        assert_eq!(response.status(), Some(ErrorStatus::InvalidSessionId));
    }
}
