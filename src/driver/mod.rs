//! Driver facade and configuration.
//!
//! This module provides the [`Driver`] type and its builder:
//!
//! - [`Driver`] - Executes decoded or raw JSON requests
//! - [`DriverBuilder`] - Fluent configuration
//! - [`DriverOptions`] - Dialog wait timings
//!
//! # Example
//!
//! ```ignore
//! use native_webdriver::Driver;
//!
//! let driver = Driver::builder()
//!     .sessions(my_sessions)
//!     .build()?;
//!
//! let body = driver.execute_json(r#"{"name": "acceptAlert"}"#).await;
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `builder` | `DriverBuilder` for configuration |
//! | `core` | `Driver` execution entry points |
//! | `options` | `DriverOptions` timings |

// ============================================================================
// Submodules
// ============================================================================

/// Builder pattern for driver configuration.
pub mod builder;

/// Core driver implementation.
pub mod core;

/// Driver timing options.
pub mod options;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::DriverBuilder;
pub use self::core::Driver;
pub use options::{
    DEFAULT_DIALOG_POLL_INTERVAL, DEFAULT_DIALOG_TIMEOUT, DriverOptions, MAX_DIALOG_TIMEOUT,
};
