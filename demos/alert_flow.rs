//! Prompt handling against the in-memory browser.
//!
//! Demonstrates:
//! - Waiting for a dialog that the UI thread shows late
//! - Reading, typing into and accepting a prompt
//! - Error bodies for a plain alert and a missing dialog
//!
//! Usage:
//!   cargo run --example alert_flow
//!   cargo run --example alert_flow -- --debug

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use native_webdriver::{DialogKind, Driver, DriverOptions, MemoryBrowser, MemorySessionAccessor};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let debug = std::env::args().any(|a| a == "--debug");
    init_logging(debug);

    println!("=== Alert Flow ===\n");

    let browser = Arc::new(MemoryBrowser::new());
    let driver = Driver::builder()
        .sessions(MemorySessionAccessor::new(Arc::clone(&browser)))
        .options(DriverOptions::new().with_dialog_timeout(Duration::from_millis(500)))
        .build()?;

    // ========================================================================
    // Prompt
    // ========================================================================

    browser.open_dialog_after(DialogKind::Prompt, "What is your name?", Duration::from_millis(120));
    println!("[Prompt] Opened (visible after 120ms)");

    let text = driver.execute_json(r#"{"name": "getAlertText"}"#).await;
    println!("         getAlertText    -> {text}");

    let typed = driver
        .execute_json(r#"{"name": "sendKeysToAlert", "parameters": {"value": ["A", "d", "a"]}}"#)
        .await;
    println!("         sendKeysToAlert -> {typed}");

    let accepted = driver.execute_json(r#"{"name": "acceptAlert"}"#).await;
    println!("         acceptAlert     -> {accepted}");

    if let Some(dialog) = browser.closed_dialogs().last() {
        println!("         ✓ Closed with input {:?} ({:?})\n", dialog.input, dialog.outcome);
    }

    // ========================================================================
    // Plain alert
    // ========================================================================

    browser.open_dialog(DialogKind::Alert, "Saved!");
    println!("[Alert]  Opened");

    let rejected = driver
        .execute_json(r#"{"name": "sendKeysToAlert", "parameters": {"value": ["x"]}}"#)
        .await;
    println!("         sendKeysToAlert -> {rejected}");

    let dismissed = driver.execute_json(r#"{"name": "dismissAlert"}"#).await;
    println!("         dismissAlert    -> {dismissed}\n");

    // ========================================================================
    // No dialog
    // ========================================================================

    let missing = driver.execute_json(r#"{"name": "acceptAlert"}"#).await;
    println!("[None]   acceptAlert     -> {missing}");

    Ok(())
}

/// Initialize tracing/logging.
fn init_logging(debug: bool) {
    let filter = if debug {
        "native_webdriver=debug"
    } else {
        "native_webdriver=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}
