//! Deadline monitoring for time-bounded search.
//!
//! The caller owns the clock and hands the search a `time_left` callback that
//! reports the remaining budget in milliseconds. Every search node polls it on
//! entry; once the reading falls under the safety threshold the node fails
//! with [`TimeExceeded`], and `?` unwinds the whole recursion.

use std::time::Instant;

/// Default safety margin in milliseconds.
pub const DEFAULT_TIMEOUT_MS: f64 = 10.0;

/// The remaining budget dropped below the safety threshold.
///
/// This is a control-flow signal for the move selector, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("search time exceeded: {remaining:.1} ms left, threshold {threshold:.1} ms")]
pub struct TimeExceeded {
    pub remaining: f64,
    pub threshold: f64,
}

/// Live view of a time budget, queried at every search node.
#[derive(Clone, Copy)]
pub struct Deadline<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold: f64,
}

impl<'a> Deadline<'a> {
    pub fn new(time_left: &'a dyn Fn() -> f64, threshold: f64) -> Self {
        Self { time_left, threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Milliseconds left according to the caller's clock. May be negative.
    pub fn remaining(&self) -> f64 {
        (self.time_left)()
    }

    pub fn check(&self) -> Result<(), TimeExceeded> {
        let remaining = self.remaining();
        if remaining < self.threshold {
            return Err(TimeExceeded {
                remaining,
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for Deadline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deadline")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// Wall-clock `time_left` callback for a budget starting now.
pub fn countdown(budget_ms: f64) -> impl Fn() -> f64 {
    let start = Instant::now();
    move || budget_ms - start.elapsed().as_secs_f64() * 1000.0
}
