//! Wall-clock time of day
//!
//! The clock only ever reasons about hours and minutes. Seconds and dates
//! belong to the network time collaborator.

use serde::{Deserialize, Serialize};

/// Minutes in a day
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Hour and minute of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
}

impl ClockTime {
    /// Create a time, rejecting out-of-range fields
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Minutes elapsed since midnight
    pub fn minute_of_day(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Build a time from minutes since midnight, wrapping at 24h
    pub fn from_minute_of_day(minutes: u16) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    /// Minutes from `self` until the next occurrence of `target`
    ///
    /// Returns 0 when both are the same minute.
    pub fn minutes_until(self, target: ClockTime) -> u16 {
        let now = self.minute_of_day();
        let then = target.minute_of_day();
        (then + MINUTES_PER_DAY - now) % MINUTES_PER_DAY
    }

    /// Time remaining until `target`, expressed as an hour/minute pair
    ///
    /// Used for the "time to sleep" readout next to the alarm.
    pub fn until(self, target: ClockTime) -> ClockTime {
        ClockTime::from_minute_of_day(self.minutes_until(target))
    }
}
