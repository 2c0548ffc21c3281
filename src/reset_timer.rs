use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    deadline: Instant,
    payload: T,
}

/// A one-off timer that can be reset to its initial delay.
///
/// Holds at most one pending payload. The owner polls it with
/// [`ResetTimer::take_expired`]; nothing fires on its own and nothing repeats.
#[derive(Debug)]
pub struct ResetTimer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> ResetTimer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces any pending payload and restarts the countdown from `now`.
    pub fn arm(&mut self, payload: T, now: Instant) {
        self.pending = Some(Pending {
            deadline: now + self.delay,
            payload,
        });
    }

    /// Cancels the pending payload, returning it if there was one.
    pub fn stop(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn take_expired(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.stop(),
            _ => None,
        }
    }
}
