//! Cancellable timers for round pacing.

use std::time::Duration;

use log::trace;
use serde::{Deserialize, Serialize};

/// Unique identifier for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u32);

impl TimerId {
    /// Create a new timer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Work the engine defers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// End the display of a resolved round and return to idle.
    FinishRound,
    /// Deal a fresh game after game over.
    ResetGame,
}

/// A pending timer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled {
    pub id: TimerId,
    pub task: Task,
    /// Absolute game time at which the task becomes due.
    pub due: Duration,
}

/// Pending timers, fired in due order.
///
/// Timers with the same due time fire in the order they were scheduled.
/// Serializable so an engine checkpoint keeps its pending timers.
///
/// ```
/// use std::time::Duration;
/// use elemental_duel::schedule::{Scheduler, Task};
///
/// let mut timers = Scheduler::new();
/// let finish = timers.schedule(Task::FinishRound, Duration::from_millis(2500));
/// timers.schedule(Task::ResetGame, Duration::from_millis(3000));
///
/// assert!(timers.cancel(finish));
/// let due = timers.pop_next_due(Duration::from_secs(5)).map(|s| s.task);
/// assert_eq!(due, Some(Task::ResetGame));
/// assert!(timers.is_empty());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    /// Sorted by (due, id).
    pending: Vec<Scheduled>,
    next_id: u32,
}

impl Scheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task at an absolute time.
    pub fn schedule(&mut self, task: Task, due: Duration) -> TimerId {
        let id = TimerId::new(self.next_id);
        self.next_id += 1;

        let index = self.pending.partition_point(|s| s.due <= due);
        self.pending.insert(index, Scheduled { id, task, due });
        trace!("scheduled {:?} as {} at {:?}", task, id, due);
        id
    }

    /// Cancel a timer. Returns `false` if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        let cancelled = self.pending.len() != before;
        if cancelled {
            trace!("cancelled {}", id);
        }
        cancelled
    }

    /// Cancel every pending timer. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        if dropped > 0 {
            trace!("cancelled {} pending timers", dropped);
        }
        dropped
    }

    /// Remove and return the earliest timer if it is due.
    pub fn pop_next_due(&mut self, now: Duration) -> Option<Scheduled> {
        if self.pending.first()?.due <= now {
            Some(self.pending.remove(0))
        } else {
            None
        }
    }

    /// When the earliest pending timer is due.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|s| s.due)
    }

    /// Is a timer still pending?
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|s| s.id == id)
    }

    /// Pending timers, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = &Scheduled> {
        self.pending.iter()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
