//! Wall-clock budget for a single search.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Raised when the deadline passes or the search is cancelled.
///
/// Only the iterative deepening driver handles it; every other frame
/// propagates it with `?` so the unfinished depth is discarded whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchAborted;

impl fmt::Display for SearchAborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search aborted: time budget exhausted or cancelled")
    }
}

impl std::error::Error for SearchAborted {}

/// Clock for tracking the search deadline. Polled, never blocks.
///
/// `cancel` is shared with whoever may cut the search short (see
/// `Bot::cancel_handle`); storing `true` in it expires the clock.
#[derive(Debug)]
pub struct SearchClock {
    start: Instant,
    deadline: Option<Instant>,
    cancel: Arc<AtomicBool>,
}

impl SearchClock {
    /// Start a clock now. `None` means no deadline (cancellation only).
    #[must_use]
    pub fn start(budget: Option<Duration>, cancel: Arc<AtomicBool>) -> Self {
        let start = Instant::now();
        SearchClock {
            start,
            deadline: budget.map(|b| start + b),
            cancel,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// True once the deadline has passed or the search was cancelled.
    #[inline]
    #[must_use]
    pub fn expired(&self) -> bool {
        self.cancel.load(Ordering::Relaxed) || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// `Err(SearchAborted)` if the search must unwind.
    #[inline]
    pub fn check(&self) -> Result<(), SearchAborted> {
        if self.expired() {
            Err(SearchAborted)
        } else {
            Ok(())
        }
    }
}
