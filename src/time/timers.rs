//! Virtual-clock timer queue.
//!
//! [`TimerQueue`] stands in for the host's `setTimeout` / `setInterval`.
//! Time only moves when the owner calls [`TimerQueue::pop_due`] or
//! [`TimerQueue::set_now`], so the same page logic runs against a simulated
//! clock in tests and against wall time when a host drives it.

use slotmap::{new_key_type, SlotMap};

/// Milliseconds on the page clock.
pub type Millis = u64;

new_key_type! {
    /// Handle to a scheduled timer. Stale handles are harmless.
    pub struct TimerId;
}

#[derive(Debug)]
struct Timer<T> {
    due: Millis,
    /// `Some` for repeating timers.
    period: Option<Millis>,
    /// Scheduling order; breaks ties between timers due at the same instant.
    seq: u64,
    task: T,
}

/// Cancellable one-shot and repeating timers carrying a task payload.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Millis,
    next_seq: u64,
    timers: SlotMap<TimerId, Timer<T>>,
}

impl<T: Clone> TimerQueue<T> {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            timers: SlotMap::with_key(),
        }
    }

    /// Current page time.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Run `task` once, `delay` ms from now.
    pub fn set_timeout(&mut self, delay: Millis, task: T) -> TimerId {
        self.schedule(delay, None, task)
    }

    /// Run `task` every `period` ms, first firing one period from now.
    ///
    /// A zero period is clamped to 1 ms so the queue always makes progress.
    pub fn set_interval(&mut self, period: Millis, task: T) -> TimerId {
        let period = period.max(1);
        self.schedule(period, Some(period), task)
    }

    /// Cancel a timer. Returns whether it was still active; cancelling twice
    /// is a no-op.
    pub fn clear(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Whether the timer is still scheduled.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Number of scheduled timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Deadline of the earliest scheduled timer.
    pub fn next_due(&self) -> Option<Millis> {
        self.timers.values().map(|t| t.due).min()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Repeating timers are rescheduled before being returned.
    pub fn pop_due(&mut self, until: Millis) -> Option<(TimerId, T)> {
        let (id, due) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(id, t)| (id, t.due))?;

        self.now = self.now.max(due);
        let seq = self.next_seq;
        self.next_seq += 1;

        let timer = self.timers.get_mut(id)?;
        let period = timer.period;
        match period {
            Some(period) => {
                timer.due = due + period;
                timer.seq = seq;
                Some((id, timer.task.clone()))
            }
            None => self.timers.remove(id).map(|t| (id, t.task)),
        }
    }

    /// Move the clock forward to `t` without firing anything. Moving
    /// backwards is ignored.
    pub fn set_now(&mut self, t: Millis) {
        self.now = self.now.max(t);
    }

    fn schedule(&mut self, delay: Millis, period: Option<Millis>, task: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(Timer {
            due: self.now + delay,
            period,
            seq,
            task,
        })
    }
}

impl<T: Clone> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
