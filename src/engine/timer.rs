//! Cancellable one-shot timer driven by an external clock
//!
//! The event loop owns the clock: it asks for `deadline()` to bound its
//! input poll and calls `poll(now)` afterwards. Every `schedule` hands out a
//! `TimerHandle` with a fresh generation, so a handle from an earlier
//! schedule can never fire once it has been replaced or cancelled.

use std::time::{Duration, Instant};

/// Identifies one armed deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    handle: TimerHandle,
    armed_at: Instant,
    delay: Duration,
}

impl Pending {
    fn deadline(&self) -> Instant {
        self.armed_at + self.delay
    }
}

#[derive(Debug, Default)]
pub struct CancellableTimer {
    generation: u64,
    pending: Option<Pending>,
}

impl CancellableTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer `delay` after `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TimerHandle {
        let handle = self.next_handle();
        self.pending = Some(Pending {
            handle,
            armed_at: now,
            delay,
        });
        handle
    }

    /// Changes the delay of the pending deadline, measured from when it was
    /// originally armed. The old handle is invalidated.
    pub fn rearm(&mut self, delay: Duration) -> Option<TimerHandle> {
        let armed_at = self.pending?.armed_at;
        let handle = self.next_handle();
        self.pending = Some(Pending {
            handle,
            armed_at,
            delay,
        });
        Some(handle)
    }

    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.pending.take().map(|pending| pending.handle)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.pending.is_some_and(|pending| pending.handle == handle)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.deadline())
    }

    /// Fires the pending deadline if it has passed. A deadline fires once.
    pub fn poll(&mut self, now: Instant) -> Option<TimerHandle> {
        match self.pending {
            Some(pending) if now >= pending.deadline() => {
                self.pending = None;
                Some(pending.handle)
            }
            _ => None,
        }
    }

    fn next_handle(&mut self) -> TimerHandle {
        self.generation += 1;
        TimerHandle {
            generation: self.generation,
        }
    }
}
