//! One-shot state timer
//!
//! At most one deadline is live. Arming replaces the previous deadline,
//! and a deadline fires once: it must be re-armed to repeat.

/// Single one-shot deadline on the monotonic millisecond clock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerService {
    deadline: Option<u64>,
}

impl TimerService {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `duration_ms` after `now_ms`
    pub fn trigger(&mut self, now_ms: u64, duration_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(duration_ms));
    }

    /// Drop any pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Disarm and return true if the deadline has passed
    pub fn take_expired(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
