//! Shared state-machine context
//!
//! Everything the state hooks read or write: collaborators, the timer,
//! the alarm configuration and per-state scratch data.

use crate::clock::ClockTime;
use crate::config::{Persisted, Settings};
use crate::input::Direction;
use crate::traits::{Board, DisplayDriver, NetworkTime};

use super::timer::TimerService;
use super::BOOST_MS;

/// Last rendered status icons, `None` until first shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Icons {
    pub wifi: Option<bool>,
    pub broker: Option<bool>,
    pub audio: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeData {
    /// Time-until-alarm currently on screen
    pub bed_time: Option<ClockTime>,
}

/// Field being edited in SetAlarm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    Hour,
    Minute,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SetAlarmData {
    pub phase: EditPhase,
    /// Edited field currently blanked
    pub hidden: bool,
    /// Alarm time on entry, restored on cancel
    pub original: ClockTime,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlarmData {
    pub volume: u8,
    /// Timer firings since the last volume step
    pub counter: u8,
    /// Blink phase of the ringing icon
    pub lit: bool,
}

/// Snooze cancel gesture: rotate, long press, rotate the other way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    #[default]
    Waiting,
    FirstRotation(Direction),
    AfterLongPress(Direction),
    Cancelled,
}

impl Gesture {
    /// Progress shown on the display
    pub fn step(self) -> u8 {
        match self {
            Gesture::Waiting => 0,
            Gesture::FirstRotation(_) => 1,
            Gesture::AfterLongPress(_) => 2,
            Gesture::Cancelled => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SnoozeData {
    pub gesture: Gesture,
    pub start_ms: u64,
    /// Seconds last shown on the countdown
    pub remaining_s: u16,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PairingData {
    /// Blink phase of the pairing icon
    pub lit: bool,
}

/// State shared by all hooks
pub struct Context<B: Board> {
    pub board: B,
    pub timer: TimerService,
    /// Monotonic time of the current tick or event
    pub now_ms: u64,
    pub alarm_time: ClockTime,
    pub armed: bool,
    pub settings: Settings,
    /// Wall-clock minute currently on screen
    pub shown_time: ClockTime,
    /// Minute the alarm last rang for
    pub ring_guard: Option<ClockTime>,
    pub icons: Icons,
    pub time: TimeData,
    pub set_alarm: SetAlarmData,
    pub alarm: AlarmData,
    pub snooze: SnoozeData,
    pub pairing: PairingData,
}

impl<B: Board> Context<B> {
    pub fn new(mut board: B, persisted: &Persisted, now_ms: u64) -> Self {
        let shown_time = board.network().current_time();
        Self {
            board,
            timer: TimerService::new(),
            now_ms,
            alarm_time: persisted.alarm_time,
            armed: false,
            settings: persisted.settings,
            shown_time,
            ring_guard: None,
            icons: Icons::default(),
            time: TimeData::default(),
            set_alarm: SetAlarmData::default(),
            alarm: AlarmData::default(),
            snooze: SnoozeData::default(),
            pairing: PairingData::default(),
        }
    }

    /// Arm the state timer relative to now
    pub fn trigger(&mut self, duration_ms: u64) {
        self.timer.trigger(self.now_ms, duration_ms);
    }

    /// Raise brightness for [`BOOST_MS`]
    pub fn boost(&mut self) {
        self.board.display().set_boost(true);
        self.trigger(BOOST_MS);
    }
}
