//! Cancellable deferred task for coalescing bursts of events
//!
//! Each debounced action owns one [`Debouncer`]. Scheduling while a task is
//! pending cancels it and starts a fresh quiet window with the newest payload
//! (last event wins, nothing accumulates). The owner polls with the current
//! time; the payload is released once the window has elapsed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// (Re)start the quiet window at `now` carrying `payload`
    ///
    /// A deadline past the end of the clock fires on the next poll.
    pub fn schedule(&mut self, now: Instant, payload: T) {
        let deadline = now.checked_add(self.window).unwrap_or(now);
        self.pending = Some((deadline, payload));
    }

    /// Release the payload if the quiet window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(deadline, _)| now >= *deadline);
        if !due {
            return None;
        }
        self.pending.take().map(|(_, payload)| payload)
    }

    /// When the pending task would fire, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending task without running it
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_after_window() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(25 * MS);
        assert_eq!(debouncer.window(), 25 * MS);
        debouncer.schedule(t0, "a");
        assert_eq!(debouncer.deadline(), Some(t0 + 25 * MS));

        assert_eq!(debouncer.poll(t0 + 24 * MS), None);
        assert_eq!(debouncer.poll(t0 + 25 * MS), Some("a"));
        assert_eq!(debouncer.poll(t0 + 50 * MS), None);
    }

    #[test]
    fn test_reschedule_resets_window_and_payload() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(100 * MS);
        debouncer.schedule(t0, 1);
        debouncer.schedule(t0 + 60 * MS, 2);
        debouncer.schedule(t0 + 120 * MS, 3);

        // 100ms after the first event, but the window was restarted
        assert_eq!(debouncer.poll(t0 + 150 * MS), None);
        assert_eq!(debouncer.poll(t0 + 220 * MS), Some(3));
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(10 * MS);
        debouncer.schedule(t0, ());
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert_eq!(debouncer.poll(t0 + 20 * MS), None);
        assert!(debouncer.deadline().is_none());
    }
}
