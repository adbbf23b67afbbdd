//! Browser-side collaborators of command handlers.
//!
//! This module contains the types handlers use to reach a native dialog:
//!
//! - [`SessionAccessor`] - Resolves the browser a command targets
//! - [`Browser`] - Native window surface (dialog probing and controls)
//! - [`DialogLocator`] - Bounded wait for a dialog to appear
//! - [`Alert`] - One located dialog, bound for the length of a command
//!
//! [`memory`] provides an in-memory implementation of both traits.

// ============================================================================
// Submodules
// ============================================================================

/// Alert bound to a located dialog.
pub mod alert;

/// Browser trait.
pub mod core;

/// Dialog kinds, buttons and locator.
pub mod dialog;

/// In-memory browser and session accessor.
pub mod memory;

/// Session accessor trait.
pub mod session;

// ============================================================================
// Re-exports
// ============================================================================

pub use alert::Alert;
pub use self::core::Browser;
pub use dialog::{DialogButton, DialogKind, DialogLocator};
pub use memory::{ClosedDialog, DialogOutcome, MemoryBrowser, MemorySessionAccessor};
pub use session::SessionAccessor;
