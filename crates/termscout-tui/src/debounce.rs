//! Keystroke debouncing for the live search input

use std::time::{Duration, Instant};

/// Quiet period before a typed query is committed to a search
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(300);

/// What an input change means for the app right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The input trimmed to empty: drop any pending commit and clear the
    /// screen immediately, no waiting.
    Cleared,
    /// A commit is armed for the trimmed text once typing goes quiet.
    Armed,
}

/// Collapses a burst of text changes into a single search trigger
///
/// Cooperative, single-threaded: the owner feeds every change through
/// [`Debouncer::input`] and calls [`Debouncer::poll`] on its event-loop tick.
/// Only the most recent input within any quiet window survives.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a text change at `now`
    pub fn input(&mut self, text: &str, now: Instant) -> InputEvent {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.pending = None;
            return InputEvent::Cleared;
        }

        self.pending = Some((trimmed.to_string(), now + DEBOUNCE_INTERVAL));
        InputEvent::Armed
    }

    /// Fire the pending commit if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if due {
            self.pending.take().map(|(query, _)| query)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn a_burst_commits_once_with_the_last_value() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        assert_eq!(debouncer.input("f", t0), InputEvent::Armed);
        assert_eq!(debouncer.input("fe", t0 + ms(100)), InputEvent::Armed);
        assert_eq!(debouncer.input("fever", t0 + ms(200)), InputEvent::Armed);

        // The first deadline (t0 + 300) has passed, but it was superseded.
        assert_eq!(debouncer.poll(t0 + ms(350)), None);

        assert_eq!(debouncer.poll(t0 + ms(500)), Some("fever".to_string()));
        assert_eq!(debouncer.poll(t0 + ms(600)), None);
    }

    #[test]
    fn commit_waits_for_the_quiet_period() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        debouncer.input("flu", t0);
        assert_eq!(debouncer.poll(t0 + ms(299)), None);
        assert_eq!(debouncer.poll(t0 + ms(300)), Some("flu".to_string()));
    }

    #[test]
    fn committed_query_is_trimmed() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        debouncer.input("  I10  ", t0);
        assert_eq!(debouncer.poll(t0 + ms(300)), Some("I10".to_string()));
    }

    #[test]
    fn whitespace_only_input_clears_and_cancels() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        debouncer.input("fever", t0);
        assert_eq!(debouncer.input("   ", t0 + ms(100)), InputEvent::Cleared);

        // The armed commit died with the clear.
        assert_eq!(debouncer.poll(t0 + ms(1000)), None);
    }

    #[test]
    fn empty_input_clears_regardless_of_timing() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        assert_eq!(debouncer.input("", t0), InputEvent::Cleared);
        debouncer.input("flu", t0 + ms(10));
        assert_eq!(debouncer.input("", t0 + ms(400)), InputEvent::Cleared);
        assert_eq!(debouncer.poll(t0 + ms(2000)), None);
    }
}
