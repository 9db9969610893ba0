//! Display collaborator
//!
//! The state machine names what to show; layout, fonts and refresh are the
//! driver's business. Calls are fire-and-forget.

use crate::clock::ClockTime;

/// Element on the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Element {
    /// Current time, the main digits
    Clock,
    /// Configured alarm time
    AlarmTime,
    /// Ringing indicator
    AlarmActive,
    /// Time left until the alarm
    BedTime,
    /// Snooze countdown in seconds
    SnoozeTime,
    /// Progress through the snooze cancel gesture
    SnoozeCancel,
    WifiStatus,
    BrokerStatus,
    /// Pairing indicator
    WifiSetting,
    /// Audio module status
    Audio,
}

/// Part of a time element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Hours,
    Minutes,
}

/// How to render an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    Show,
    Hide,
    /// Show the element with one field blanked
    HidePartial(Field),
    /// Blink phase, `true` is lit
    Blink(bool),
}

/// Value attached to an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Payload {
    None,
    Time(ClockTime),
    Seconds(u16),
    /// Gesture step or status flag
    Step(u8),
}

/// Trait for the clock display
pub trait DisplayDriver {
    /// Render one element
    fn update(&mut self, element: Element, payload: Payload, action: Action);

    /// Temporary brightness boost
    fn set_boost(&mut self, on: bool);

    /// Full brightness while the alarm rings
    fn set_max_brightness(&mut self, on: bool);

    /// True when the display is bright enough to read
    ///
    /// A press on a dark display only wakes it.
    fn is_lit(&self) -> bool;
}

/// Shorthands for common updates
pub trait DisplayExt: DisplayDriver {
    fn show(&mut self, element: Element, payload: Payload) {
        self.update(element, payload, Action::Show);
    }

    fn hide(&mut self, element: Element) {
        self.update(element, Payload::None, Action::Hide);
    }

    fn show_time(&mut self, element: Element, time: ClockTime) {
        self.update(element, Payload::Time(time), Action::Show);
    }

    /// Render a boolean status icon
    fn show_flag(&mut self, element: Element, on: bool) {
        self.update(element, Payload::Step(u8::from(on)), Action::Show);
    }
}

impl<T: DisplayDriver + ?Sized> DisplayExt for T {}
