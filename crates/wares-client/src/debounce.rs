//! Debounced search input.

use std::time::Duration;
use tokio::time::Instant;

/// Delay applied to search-term edits before a query is issued.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Collapses a burst of search-term edits into one settled value.
///
/// Every [`submit`](Self::submit) restarts the delay; [`poll`](Self::poll)
/// hands out the latest term once the delay has elapsed with no newer
/// submission. Uses [`tokio::time::Instant`] so tests run on a paused clock.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    term: String,
    settle_at: Instant,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    pub const fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a new term, restarting the settle timer.
    pub fn submit(&mut self, term: impl Into<String>) {
        self.pending = Some(Pending {
            term: term.into(),
            settle_at: Instant::now() + self.delay,
        });
    }

    /// Take the settled term, if the delay has fully elapsed.
    pub fn poll(&mut self) -> Option<String> {
        if self
            .pending
            .as_ref()
            .is_some_and(|p| Instant::now() >= p.settle_at)
        {
            self.pending.take().map(|p| p.term)
        } else {
            None
        }
    }

    /// When the pending term will settle, for event loops that sleep.
    pub fn settle_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.settle_at)
    }

    pub const fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
