//! Push-button debouncer with short/long press classification
//!
//! The button is sampled every [`SAMPLE_PERIOD_MS`]. Samples are kept in a
//! sliding window, newest first:
//!
//! ```text
//!  newest                                         oldest
//!  [ stable_samples ][ bounce_samples ][ guard_samples ]
//!    all pressed        ignored          all released     => down
//!    all released       ignored          all pressed      => up
//! ```
//!
//! A recognized transition refills the whole window with the new level so
//! the same transition cannot be seen twice.

use super::events::InputEvent;

/// Sampling period of the button task
pub const SAMPLE_PERIOD_MS: u64 = 10;

/// Hold time after which a press becomes a long press
pub const LONG_PRESS_MS: u64 = 1000;

/// Largest supported sample window
pub const MAX_WINDOW: u8 = 32;

/// Debouncer configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceError {
    /// Stable or guard run of zero samples
    EmptyRun,
    /// Window wider than [`MAX_WINDOW`]
    WindowTooLarge,
}

/// Debouncer tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Pin reads low while pressed
    pub active_low: bool,
    /// Newest samples that must agree on the new level
    pub stable_samples: u8,
    /// Samples between the stable and guard runs that are not inspected
    pub bounce_samples: u8,
    /// Older samples that must still show the previous level
    pub guard_samples: u8,
    /// Hold time for a long press
    pub long_press_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            active_low: true,
            stable_samples: 6,
            bounce_samples: 6,
            guard_samples: 4,
            long_press_ms: LONG_PRESS_MS,
        }
    }
}

impl DebounceConfig {
    /// Total number of samples inspected
    pub fn window(&self) -> u8 {
        self.stable_samples
            .saturating_add(self.bounce_samples)
            .saturating_add(self.guard_samples)
    }

    fn validate(&self) -> Result<(), DebounceError> {
        if self.stable_samples == 0 || self.guard_samples == 0 {
            return Err(DebounceError::EmptyRun);
        }
        if self.window() > MAX_WINDOW {
            return Err(DebounceError::WindowTooLarge);
        }
        Ok(())
    }
}

/// Shift register of normalized samples, bit 0 is the newest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SampleHistory {
    bits: u32,
}

impl SampleHistory {
    const fn filled(pressed: bool) -> Self {
        Self {
            bits: if pressed { u32::MAX } else { 0 },
        }
    }

    fn push(&mut self, pressed: bool) {
        self.bits = (self.bits << 1) | u32::from(pressed);
    }

    /// True when `len` samples starting `skip` samples back all equal `pressed`
    fn run_of(&self, pressed: bool, skip: u8, len: u8) -> bool {
        (skip..skip + len).all(|i| ((self.bits >> i) & 1 == 1) == pressed)
    }
}

/// Logical transition recognized from the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Down,
    Up,
}

/// Sliding-window debouncer
#[derive(Debug, Clone)]
pub struct ButtonDebouncer {
    config: DebounceConfig,
    history: SampleHistory,
    /// Set when a down transition is recognized, cleared by release or long press
    pressed_at: Option<u64>,
    down: bool,
}

impl ButtonDebouncer {
    /// Create a debouncer assuming the button starts released
    pub fn new(config: DebounceConfig) -> Result<Self, DebounceError> {
        config.validate()?;
        Ok(Self {
            config,
            history: SampleHistory::filled(false),
            pressed_at: None,
            down: false,
        })
    }

    pub fn config(&self) -> &DebounceConfig {
        &self.config
    }

    /// Debounced button level
    pub fn is_down(&self) -> bool {
        self.down
    }

    fn sample(&mut self, raw: bool) -> Option<Transition> {
        let pressed = raw != self.config.active_low;
        self.history.push(pressed);

        let stable = self.config.stable_samples;
        let guard_at = stable + self.config.bounce_samples;
        let guard = self.config.guard_samples;

        let transition = if !self.down
            && self.history.run_of(true, 0, stable)
            && self.history.run_of(false, guard_at, guard)
        {
            Transition::Down
        } else if self.down
            && self.history.run_of(false, 0, stable)
            && self.history.run_of(true, guard_at, guard)
        {
            Transition::Up
        } else {
            return None;
        };

        self.down = transition == Transition::Down;
        self.history = SampleHistory::filled(self.down);
        Some(transition)
    }

    /// Feed one raw pin sample taken at `now_ms`
    ///
    /// Returns a button event when a press completes or the hold time
    /// is reached.
    pub fn poll(&mut self, raw: bool, now_ms: u64) -> Option<InputEvent> {
        let transition = self.sample(raw);

        match (transition, self.pressed_at) {
            (Some(Transition::Up), Some(_)) => {
                self.pressed_at = None;
                Some(InputEvent::ShortPress)
            }
            (_, Some(start)) if now_ms.saturating_sub(start) >= self.config.long_press_ms => {
                self.pressed_at = None;
                Some(InputEvent::LongPress)
            }
            (Some(Transition::Down), None) => {
                self.pressed_at = Some(now_ms);
                None
            }
            _ => None,
        }
    }
}
