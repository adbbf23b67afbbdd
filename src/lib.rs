//! Native WebDriver - command dispatch and modal dialog automation.
//!
//! This library implements the remote-end side of WebDriver alert commands
//! for a driver that controls a native browser window.
//!
//! # Architecture
//!
//! A command flows through the driver like this:
//!
//! ```text
//! Request ─► CommandDispatcher ─► CommandHandler ─► SessionAccessor ─► Browser
//!                                      │                                 │
//!                                      │         DialogLocator (poll) ◄──┘
//!                                      ▼
//!                                 Alert ─► Response
//! ```
//!
//! Key design principles:
//!
//! - Handlers are registered by command name; adding a verb does not touch
//!   the dispatcher
//! - Dialog presence is `Option<DialogHandle>`; an [`Alert`] is only built
//!   from a located handle
//! - Dialogs are awaited with a bounded poll, since the browser UI thread
//!   shows them asynchronously
//! - Every command ends in exactly one success or error [`Response`]
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use native_webdriver::{DialogKind, Driver, MemoryBrowser, MemorySessionAccessor, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let browser = Arc::new(MemoryBrowser::new());
//!     browser.open_dialog(DialogKind::Prompt, "Your name?");
//!
//!     let driver = Driver::builder()
//!         .sessions(MemorySessionAccessor::new(Arc::clone(&browser)))
//!         .build()?;
//!
//!     let body = driver
//!         .execute_json(r#"{"name": "sendKeysToAlert", "parameters": {"value": ["h", "i"]}}"#)
//!         .await;
//!     println!("{body}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`browser`] | [`Browser`], [`SessionAccessor`], [`Alert`], dialog locator |
//! | [`driver`] | [`Driver`] facade and configuration |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`handler`] | [`CommandHandler`] trait, alert handlers, dispatcher |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | Request, parameters and response |
//! | [`wait`] | Bounded polling |

// ============================================================================
// Modules
// ============================================================================

/// Browser-side collaborators: sessions, dialogs, alerts.
pub mod browser;

/// Driver facade and configuration.
///
/// Use [`Driver::builder()`] to create a configured driver instance.
pub mod driver;

/// Error types and result aliases.
pub mod error;

/// Command handlers and dispatch.
pub mod handler;

/// Type-safe identifiers for sessions and dialogs.
pub mod identifiers;

/// Protocol message types.
pub mod protocol;

/// Bounded polling utility.
pub mod wait;

// ============================================================================
// Re-exports
// ============================================================================

// Browser types
pub use browser::{
    Alert, Browser, ClosedDialog, DialogButton, DialogKind, DialogLocator, DialogOutcome,
    MemoryBrowser, MemorySessionAccessor, SessionAccessor,
};

// Driver types
pub use driver::{Driver, DriverBuilder, DriverOptions};

// Error types
pub use error::{Error, ErrorStatus, Result};

// Handler types
pub use handler::{CommandDispatcher, CommandHandler};

// Identifier types
pub use identifiers::{DialogHandle, SessionId};

// Protocol types
pub use protocol::{AlertCommand, Outcome, ParameterMap, Request, Response};

// Wait types
pub use wait::{PollPolicy, poll_until};
