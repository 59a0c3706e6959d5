//! # Timer Scheduler
//!
//! Virtual-clock timer queue used for notification fade and removal.
//! Time only moves when the owner advances it, so lifecycles can be tested
//! deterministically. Tasks are keyed by the notification they act on and
//! can be cancelled as a group.

use crate::site::events::NotificationId;
use std::collections::BTreeMap;

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Fade,
    Remove,
}

/// A scheduled action on one notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTask {
    pub notification: NotificationId,
    pub action: TimerAction,
}

/// Ordering key: due time first, then creation order
type TaskKey = (u64, u64);

#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BTreeMap<TaskKey, TimerTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers that have not fired yet
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Schedule a task `delay_ms` after the current time
    pub fn schedule(&mut self, delay_ms: u64, task: TimerTask) -> u64 {
        let due = self.now_ms.saturating_add(delay_ms);
        let key = (due, self.next_seq);
        self.next_seq += 1;
        self.queue.insert(key, task);
        tracing::trace!("Scheduled {:?} at {}ms", task, due);
        due
    }

    /// Cancel every pending task for a notification, returning how many were dropped
    pub fn cancel(&mut self, notification: NotificationId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|_, task| task.notification != notification);
        before - self.queue.len()
    }

    /// Pop the earliest task due at or before `until`, moving the clock to its due time
    pub fn pop_due(&mut self, until: u64) -> Option<TimerTask> {
        let (&key, _) = self.queue.first_key_value()?;
        if key.0 > until {
            return None;
        }
        let task = self.queue.remove(&key)?;
        self.now_ms = self.now_ms.max(key.0);
        Some(task)
    }

    /// Move the clock forward to `time`; never moves it backwards
    pub fn set_now(&mut self, time: u64) {
        self.now_ms = self.now_ms.max(time);
    }
}
