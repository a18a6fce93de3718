//! Epoch-guarded timer queue.
//!
//! The one concurrency hazard in a scripted animation is the stale
//! timer: a callback scheduled by run N firing after run N+1 has
//! started. Every entry here carries the epoch it was scheduled under,
//! and `fire_due` silently discards entries from superseded epochs, so
//! a stale write is impossible by construction rather than by
//! convention.

use std::time::Instant;

/// Handle returned by [`TimerQueue::schedule`], usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    id: u64,
    pub epoch: u64,
}

#[derive(Debug)]
struct TimerEntry<E> {
    id: u64,
    epoch: u64,
    deadline: Instant,
    event: E,
}

/// Ordered collection of pending one-shot timers.
#[derive(Debug)]
pub struct TimerQueue<E> {
    next_id: u64,
    entries: Vec<TimerEntry<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire at `deadline`, tagged with `epoch`.
    pub fn schedule(&mut self, epoch: u64, deadline: Instant, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            epoch,
            deadline,
            event,
        });
        TimerHandle { id, epoch }
    }

    /// Cancel a single pending timer. Unknown handles are a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|e| e.id != handle.id);
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return the events of all timers due at `now` whose
    /// epoch matches `current_epoch`, in deadline order. Due timers from
    /// superseded epochs are removed without being returned.
    pub fn fire_due(&mut self, now: Instant, current_epoch: u64) -> Vec<E> {
        let mut due: Vec<TimerEntry<E>> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].deadline <= now {
                due.push(self.entries.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|e| (e.deadline, e.id));
        due.into_iter()
            .filter(|e| e.epoch == current_epoch)
            .map(|e| e.event)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fires_in_deadline_order() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(1, start + Duration::from_millis(20), "b");
        queue.schedule(1, start + Duration::from_millis(10), "a");
        queue.schedule(1, start + Duration::from_millis(30), "c");

        let fired = queue.fire_due(start + Duration::from_millis(25), 1);
        assert_eq!(fired, vec!["a", "b"]);
        let fired = queue.fire_due(start + Duration::from_millis(40), 1);
        assert_eq!(fired, vec!["c"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_not_due_yet() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(1, start + Duration::from_millis(10), ());
        assert!(queue.fire_due(start, 1).is_empty());
        assert!(!queue.is_empty());
    }

    #[test]
    fn test_stale_epoch_is_discarded() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(1, start + Duration::from_millis(10), "stale");
        queue.schedule(2, start + Duration::from_millis(10), "fresh");

        let fired = queue.fire_due(start + Duration::from_millis(15), 2);
        assert_eq!(fired, vec!["fresh"]);
        // The stale entry is gone, not merely skipped.
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(1, start, "keep");
        let drop = queue.schedule(1, start, "drop");
        queue.cancel(drop);
        let fired = queue.fire_due(start, 1);
        assert_eq!(fired, vec!["keep"]);
        // Cancelling an already-fired handle is harmless.
        queue.cancel(keep);
    }
}
