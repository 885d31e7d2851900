#![forbid(unsafe_code)]

//! Per-instance timers: a cancelable deadline queue and a debounce window.
//!
//! Nothing here spawns threads or registers global callbacks. The owner
//! polls [`TimerQueue::poll`] with the current instant (for example on
//! every frame tick) and receives the payloads whose deadlines passed.
//! Dropping the queue cancels everything it holds, so a destroyed row can
//! never be mutated by a late timer.
//!
//! # Invariants
//!
//! 1. `poll` yields due payloads in deadline order; ties keep schedule order.
//! 2. A cancelled timer never fires.
//! 3. After `cancel_all`, `poll` yields nothing until new timers are added.
//! 4. [`Debounce::trigger`] returns `true` at most once per window; triggers
//!    inside the window are dropped, not deferred.

use web_time::{Duration, Instant};

/// Opaque handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    deadline: Instant,
    payload: T,
}

/// A queue of cancelable one-shot deadlines owned by a single instance.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    /// Sorted by (deadline, id).
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `payload` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: Instant, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let idx = self
            .entries
            .partition_point(|e| (e.deadline, e.id) <= (deadline, id));
        self.entries.insert(
            idx,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Schedule `payload` to fire `delay` after `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, payload: T) -> TimerId {
        self.schedule_at(now + delay, payload)
    }

    /// Cancel one timer. Returns `true` if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Cancel every pending timer.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Remove and return every payload whose deadline is at or before `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let due = self.entries.partition_point(|e| e.deadline <= now);
        self.entries.drain(..due).map(|e| e.payload).collect()
    }

    /// Earliest pending deadline, for hosts that sleep until the next tick.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Whether `id` is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of pending timers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no timers are pending.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Debounce
// ---------------------------------------------------------------------------

/// Leading-edge debounce: the first trigger fires, later triggers inside
/// the window are dropped.
#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    last_fired: Option<Instant>,
}

impl Debounce {
    /// Create a debounce with the given window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Register a trigger at `now`; returns `true` if the action should run.
    pub fn trigger(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.saturating_duration_since(last) < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }

    /// Forget the current window.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }

    /// The configured window.
    #[inline]
    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }
}
