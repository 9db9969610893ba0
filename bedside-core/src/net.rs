//! Network reconnect policy
//!
//! A dropped link is retried immediately a few times. After that the
//! network task sleeps and rechecks: often while the clock has never been
//! synchronised, rarely once it has.

/// Immediate reconnect attempts after a disconnect
pub const QUICK_RETRIES: u8 = 3;

/// Recheck period while the clock has no time sync
pub const RECHECK_UNSYNCED_MS: u64 = 15_000;

/// Recheck period once the clock has been synchronised
pub const RECHECK_SYNCED_MS: u64 = 15 * 60 * 1000;

/// What to do after the link went down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReconnectAction {
    /// Attempt `n` of [`QUICK_RETRIES`], retry now
    RetryNow(u8),
    /// Quick retries exhausted, wait for the next recheck
    Backoff,
}

/// Tracks quick reconnect attempts
#[derive(Debug, Clone, Default)]
pub struct ReconnectPolicy {
    attempts: u8,
}

impl ReconnectPolicy {
    pub const fn new() -> Self {
        Self { attempts: 0 }
    }

    /// Record a disconnect and decide the next step
    pub fn on_disconnect(&mut self) -> ReconnectAction {
        if self.attempts < QUICK_RETRIES {
            self.attempts += 1;
            ReconnectAction::RetryNow(self.attempts)
        } else {
            self.attempts = 0;
            ReconnectAction::Backoff
        }
    }

    /// Record a successful connection
    pub fn on_connected(&mut self) {
        self.attempts = 0;
    }

    /// Delay before the next link check
    pub fn recheck_delay_ms(time_synced: bool) -> u64 {
        if time_synced {
            RECHECK_SYNCED_MS
        } else {
            RECHECK_UNSYNCED_MS
        }
    }
}
