//! Debouncing for the general search box.

use std::time::{Duration, Instant};

/// How long the search input has to stay unchanged before it is applied.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(200);

/// Holds back search input until the user stops typing.
///
/// Every call to [DebouncedSearch::input] restarts the quiet period, so only
/// the last term typed within the delay gets applied. The current time is
/// passed in by the caller.
#[derive(Debug, Clone)]
pub struct DebouncedSearch {
    delay: Duration,
    applied: String,
    pending: Option<(String, Instant)>,
}

impl Default for DebouncedSearch {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DELAY)
    }
}

impl DebouncedSearch {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            applied: String::new(),
            pending: None,
        }
    }

    /// Record that the search box now contains `term`.
    pub fn input(&mut self, term: &str, now: Instant) {
        self.pending = Some((term.to_owned(), now));
    }

    /// Apply the pending term if it has been left alone for the full delay.
    ///
    /// Returns the newly applied term, or `None` if nothing changed.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        let (_, typed_at) = self.pending.as_ref()?;

        if now.saturating_duration_since(*typed_at) < self.delay {
            return None;
        }

        let (term, _) = self.pending.take()?;

        if term == self.applied {
            return None;
        }

        self.applied = term;

        Some(&self.applied)
    }

    /// The term currently used to filter the table.
    pub fn applied(&self) -> &str {
        &self.applied
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending term will be applied, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|(_, typed_at)| *typed_at + self.delay)
    }
}
