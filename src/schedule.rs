//! Deferred, cancellable tasks
//!
//! The game loop schedules payloads against its own clock and drains the due
//! ones each frame. A task fires at most once; cancelling through its
//! [`TimerHandle`] guarantees it never fires.

/// Identifies one scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Scheduled<T> {
    handle: TimerHandle,
    due_at_ms: f64,
    payload: T,
}

/// Pending tasks ordered by due time
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Schedule `payload` to become due at `due_at_ms`
    pub fn schedule(&mut self, due_at_ms: f64, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        // Keep sorted by due time; equal times keep insertion order
        let pos = self
            .pending
            .iter()
            .position(|s| s.due_at_ms > due_at_ms)
            .unwrap_or(self.pending.len());
        self.pending.insert(
            pos,
            Scheduled {
                handle,
                due_at_ms,
                payload,
            },
        );
        handle
    }

    /// Drop a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.iter().position(|s| s.handle == handle) {
            Some(i) => {
                self.pending.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    /// Remove and return every task due at or before `now_ms`, earliest first
    pub fn take_due(&mut self, now_ms: f64) -> Vec<(TimerHandle, T)> {
        let split = self
            .pending
            .iter()
            .position(|s| s.due_at_ms > now_ms)
            .unwrap_or(self.pending.len());
        self.pending
            .drain(..split)
            .map(|s| (s.handle, s.payload))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
