//! Clock state machine
//!
//! Five states, each a set of hook functions over a shared [`Context`].
//! [`ClockMachine`] owns the context and the current [`StateId`] and
//! dispatches by exhaustive `match`, so every state handles every event.
//!
//! Transition protocol: cancel the timer, run `exit` of the old state,
//! switch, run `enter` of the new state. An `exit` hook may arm a deadline
//! that the incoming state then receives as its own.

mod alarm;
pub mod context;
pub mod machine;
mod pairing;
mod set_alarm;
mod snooze;
mod time;
pub mod timer;

#[cfg(test)]
pub(crate) mod mock;

pub use context::{Context, Gesture, Icons};
pub use machine::ClockMachine;
pub use timer::TimerService;

/// Brightness boost after user interaction
pub const BOOST_MS: u64 = 3000;

/// Blink half-period for edited digits and icons
pub const BLINK_MS: u64 = 500;

/// Delay before the first crescendo step after the alarm starts
pub const ALARM_START_MS: u64 = 10;

/// Volume the alarm starts ringing at
pub const ALARM_START_VOLUME: u8 = 5;

/// Clock states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateId {
    /// Showing the time, alarm armed or not
    Time,
    /// Editing the alarm hour, then minute
    SetAlarm,
    /// Ringing with rising volume
    Alarm,
    /// Alarm paused for the snooze period
    Snooze,
    /// Waiting for WiFi credentials
    WifiPairing,
}
