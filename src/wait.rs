//! Bounded polling for conditions observed from outside the browser.
//!
//! The target application's UI thread has to process its pending events
//! before a freshly triggered dialog becomes queryable, and the command
//! context cannot observe that directly. [`poll_until`] re-runs a probe at a
//! fixed interval until it yields a value or the budget runs out.
//!
//! The final probe happens at the deadline, so a value that becomes
//! available exactly at the budget is still seen and anything later is not.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use native_webdriver::wait::{PollPolicy, poll_until};
//!
//! let policy = PollPolicy::new(Duration::from_millis(50), Duration::from_secs(1));
//! let handle = poll_until(policy, || browser.active_dialog()).await;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::trace;

// ============================================================================
// Constants
// ============================================================================

/// Smallest interval a policy will sleep between probes.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

// ============================================================================
// PollPolicy
// ============================================================================

/// Interval and total budget for [`poll_until`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    interval: Duration,
    timeout: Duration,
}

impl PollPolicy {
    /// Creates a policy probing every `interval` for at most `timeout`.
    ///
    /// Intervals below one millisecond are raised to one millisecond.
    #[must_use]
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            timeout,
        }
    }

    /// Creates a policy that probes exactly once, without waiting.
    #[must_use]
    pub fn immediate() -> Self {
        Self::new(MIN_INTERVAL, Duration::ZERO)
    }

    /// Returns the interval between probes.
    #[inline]
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the total wait budget.
    #[inline]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

// ============================================================================
// poll_until
// ============================================================================

/// Runs `probe` until it returns `Some` or the policy's budget is spent.
///
/// The first probe runs immediately. Returns `None` only after a probe at
/// (or past) the deadline has come back empty.
pub async fn poll_until<T, F, Fut>(policy: PollPolicy, mut probe: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    // A budget too large to represent as an instant never runs out.
    let deadline = Instant::now().checked_add(policy.timeout);
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        if let Some(value) = probe().await {
            trace!(attempts, "Poll condition satisfied");
            return Some(value);
        }

        let pause = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    trace!(
                        attempts,
                        timeout_ms = duration_millis(policy.timeout),
                        "Poll budget exhausted"
                    );
                    return None;
                }
                policy.interval.min(deadline - now)
            }
            None => policy.interval,
        };

        sleep(pause).await;
    }
}

/// Milliseconds in `duration`, saturating at `u64::MAX`.
pub(crate) fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// Tests
// ============================================================================
