//! Burst coalescing.
//!
//! A [`Debouncer`] turns a burst of signals into a single task that runs once
//! the signals have been quiet for a full window. Every new signal cancels
//! the pending task and schedules a fresh one.

use super::timers::{Millis, TimerId, TimerQueue};

/// Coalesces bursts of signals into one deferred task.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Millis,
    pending: Option<TimerId>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet window.
    pub fn new(quiet: Millis) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a signal; `task` runs after `quiet` ms without further signals.
    pub fn signal<T: Clone>(&mut self, timers: &mut TimerQueue<T>, task: T) -> TimerId {
        if let Some(previous) = self.pending.take() {
            timers.clear(previous);
        }
        let id = timers.set_timeout(self.quiet, task);
        self.pending = Some(id);
        id
    }

    /// Acknowledge that the pending task fired.
    pub fn fired(&mut self, id: TimerId) {
        if self.pending == Some(id) {
            self.pending = None;
        }
    }

    /// Whether a task is waiting for the quiet window to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The quiet window.
    pub fn quiet(&self) -> Millis {
        self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_runs_once_after_quiet_window() {
        let mut timers = TimerQueue::new();
        let mut debounce = Debouncer::new(250);

        for t in [0, 100, 200, 300] {
            timers.set_now(t);
            debounce.signal(&mut timers, "relayout");
        }
        assert_eq!(timers.len(), 1);
        assert!(timers.pop_due(549).is_none());

        let (id, task) = timers.pop_due(550).unwrap();
        assert_eq!(task, "relayout");
        assert_eq!(timers.now(), 550);
        debounce.fired(id);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn separate_bursts_run_separately() {
        let mut timers = TimerQueue::new();
        let mut debounce = Debouncer::new(250);

        debounce.signal(&mut timers, 1);
        let (id, _) = timers.pop_due(250).unwrap();
        debounce.fired(id);

        timers.set_now(1_000);
        debounce.signal(&mut timers, 2);
        assert!(debounce.is_pending());
        let (_, task) = timers.pop_due(1_250).unwrap();
        assert_eq!(task, 2);
    }

    #[test]
    fn stale_fired_ack_is_ignored() {
        let mut timers = TimerQueue::new();
        let mut debounce = Debouncer::new(50);
        let first = debounce.signal(&mut timers, ());
        let _second = debounce.signal(&mut timers, ());
        debounce.fired(first);
        assert!(debounce.is_pending());
        assert_eq!(debounce.quiet(), 50);
    }
}
