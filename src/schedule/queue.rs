//! Deadline-ordered revert queue.
//!
//! Entries are never cancelled. A reset leaves older entries in place;
//! they fire on schedule and the state rejects them by epoch.

use std::collections::VecDeque;
use std::time::Instant;

use crate::rules::PendingRevert;

/// A revert with the instant it becomes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledRevert {
    /// When to apply.
    pub deadline: Instant,
    /// What to apply.
    pub revert: PendingRevert,
}

/// Pending reverts, earliest deadline first.
#[derive(Clone, Debug, Default)]
pub struct RevertScheduler {
    queue: VecDeque<ScheduledRevert>,
}

impl RevertScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a revert to fire `revert.delay` after `now`.
    ///
    /// Returns the deadline.
    pub fn schedule(&mut self, revert: PendingRevert, now: Instant) -> Instant {
        let deadline = now + revert.delay;
        // Stable for equal deadlines: later entries go after earlier ones.
        let index = self.queue.partition_point(|entry| entry.deadline <= deadline);
        self.queue.insert(index, ScheduledRevert { deadline, revert });
        deadline
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.front().map(|entry| entry.deadline)
    }

    /// Remove and return every revert due at or before `now`, in order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<PendingRevert> {
        let due = self.queue.partition_point(|entry| entry.deadline <= now);
        self.queue.drain(..due).map(|entry| entry.revert).collect()
    }

    /// Number of pending reverts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Iterate over pending entries, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledRevert> {
        self.queue.iter()
    }
}
