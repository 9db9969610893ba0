//! Quadrature encoder decoder
//!
//! Decodes the two encoder lines into committed detents with noise
//! rejection. Runs on every edge of either line, so every path here is
//! O(1) and allocation-free.
//!
//! Each edge combines the previous and current 2-bit line state
//! (`A << 1 | B`) into a 4-bit transition code `current << 2 | previous`.
//! With pull-ups the detent rests at `11`:
//!
//! ```text
//! Increasing: 11 -> 01 -> 00 -> 10 -> 11    codes 7, 1, 8 latch, 14 commits
//! Decreasing: 11 -> 10 -> 00 -> 01 -> 11    codes 11, 2, 4 latch, 13 commits
//! ```
//!
//! A terminal code only commits when the matching direction is latched;
//! otherwise it clears the latch. Chatter on a single line while the other
//! stays put therefore never produces a detent. Backing out of a detent
//! past the midpoint re-latches the opposite direction and commits it.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::events::{Direction, InputEvent};
use crate::channel::EventChannel;
use crate::traits::Dial;

/// Invalid dial range configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeError {
    /// `min` is greater than `max`
    Inverted,
    /// `step` is less than 1
    ZeroStep,
    /// Wrapping requested with `step > 1`
    WrapWithStep,
}

/// Bounds and stepping of the dial position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DialRange {
    min: i16,
    max: i16,
    step: i16,
    wrap: bool,
}

impl DialRange {
    /// Power-on range until a state seeds its own
    pub const DEFAULT: DialRange = DialRange {
        min: 0,
        max: 100,
        step: 1,
        wrap: false,
    };

    /// Hour editing, 0-23 wrapping
    pub const HOURS: DialRange = DialRange {
        min: 0,
        max: 23,
        step: 1,
        wrap: true,
    };

    /// Minute editing, 0-59 wrapping
    pub const MINUTES: DialRange = DialRange {
        min: 0,
        max: 59,
        step: 1,
        wrap: true,
    };

    /// Create a validated range
    pub const fn new(min: i16, max: i16, step: i16, wrap: bool) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted);
        }
        if step < 1 {
            return Err(RangeError::ZeroStep);
        }
        if wrap && step > 1 {
            return Err(RangeError::WrapWithStep);
        }
        Ok(Self {
            min,
            max,
            step,
            wrap,
        })
    }

    pub fn min(&self) -> i16 {
        self.min
    }

    pub fn max(&self) -> i16 {
        self.max
    }

    pub fn step(&self) -> i16 {
        self.step
    }

    pub fn wraps(&self) -> bool {
        self.wrap
    }

    /// Clamp a position into `[min, max]`
    pub fn clamp(&self, position: i16) -> i16 {
        position.clamp(self.min, self.max)
    }

    /// Move one step in `direction`, clamping or wrapping at the bounds
    pub fn advance(&self, position: i16, direction: Direction) -> i16 {
        match direction {
            Direction::Increasing => {
                let next = position.saturating_add(self.step);
                if next > self.max {
                    if self.wrap {
                        self.min
                    } else {
                        self.max
                    }
                } else {
                    next
                }
            }
            Direction::Decreasing => {
                let next = position.saturating_sub(self.step);
                if next < self.min {
                    if self.wrap {
                        self.max
                    } else {
                        self.min
                    }
                } else {
                    next
                }
            }
        }
    }
}

impl Default for DialRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Outcome of one transition code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Intermediate code: remember a tentative direction
    Latch(Direction),
    /// Terminal code matching the latch: move the position
    Commit(Direction),
    /// Terminal code without a matching latch: forget the latch
    Cancel,
    /// Anything else leaves the latch untouched
    Ignore,
}

/// Transition table for a 4-bit code given the latched direction
pub(crate) fn step(latched: Option<Direction>, code: u8) -> Step {
    match code & 0x0F {
        1 | 7 | 8 => Step::Latch(Direction::Increasing),
        2 | 4 | 11 => Step::Latch(Direction::Decreasing),
        14 if latched == Some(Direction::Increasing) => Step::Commit(Direction::Increasing),
        13 if latched == Some(Direction::Decreasing) => Step::Commit(Direction::Decreasing),
        13 | 14 => Step::Cancel,
        _ => Step::Ignore,
    }
}

fn levels(a: bool, b: bool) -> u8 {
    (u8::from(a) << 1) | u8::from(b)
}

/// Quadrature decoder with a bounded position
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    /// Previous 2-bit line state
    last: u8,
    /// Direction latched by an intermediate code
    latched: Option<Direction>,
    position: i16,
    range: DialRange,
}

impl Default for QuadratureDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadratureDecoder {
    /// Create a decoder resting at the pulled-up detent
    pub const fn new() -> Self {
        Self {
            last: 0b11,
            latched: None,
            position: 0,
            range: DialRange::DEFAULT,
        }
    }

    /// Seed the previous line state from the actual pin levels
    pub fn seed(&mut self, a: bool, b: bool) {
        self.last = levels(a, b);
        self.latched = None;
    }

    /// Process one edge on either line
    ///
    /// Returns a rotation event when a detent was committed.
    pub fn update(&mut self, a: bool, b: bool) -> Option<InputEvent> {
        let current = levels(a, b);
        let code = (current << 2) | self.last;
        self.last = current;

        match step(self.latched, code) {
            Step::Latch(direction) => {
                self.latched = Some(direction);
                None
            }
            Step::Commit(direction) => {
                self.latched = None;
                self.position = self.range.advance(self.position, direction);
                Some(InputEvent::Rotation {
                    position: self.position,
                    direction,
                })
            }
            Step::Cancel => {
                self.latched = None;
                None
            }
            Step::Ignore => None,
        }
    }

    /// Replace the range, clamping the current position into it
    pub fn set_range(&mut self, range: DialRange) {
        self.range = range;
        self.position = range.clamp(self.position);
    }

    /// Force the position, clamped into the current range
    pub fn set_position(&mut self, position: i16) {
        self.position = self.range.clamp(position);
    }

    pub fn position(&self) -> i16 {
        self.position
    }

    pub fn range(&self) -> DialRange {
        self.range
    }
}

impl Dial for QuadratureDecoder {
    fn set_range(&mut self, range: DialRange) {
        QuadratureDecoder::set_range(self, range);
    }

    fn set_position(&mut self, position: i16) {
        QuadratureDecoder::set_position(self, position);
    }

    fn position(&self) -> i16 {
        QuadratureDecoder::position(self)
    }
}

/// Decoder shared between the edge handler and the control loop
///
/// The edge handler holds the lock only for the table lookup; the control
/// loop takes it to reseed the range when a state starts editing.
pub struct SharedDecoder<M: RawMutex> {
    inner: Mutex<M, RefCell<QuadratureDecoder>>,
}

impl<M: RawMutex> SharedDecoder<M> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(QuadratureDecoder::new())),
        }
    }

    /// Seed the previous line state from the actual pin levels
    pub fn seed(&self, a: bool, b: bool) {
        self.inner.lock(|d| d.borrow_mut().seed(a, b));
    }

    /// Handle one edge and publish any committed detent
    ///
    /// Rotation uses the overwrite write: a pending, unread rotation is
    /// replaced by this one.
    pub fn on_edge<N: RawMutex>(&self, a: bool, b: bool, channel: &EventChannel<N>) -> Option<InputEvent> {
        let event = self.inner.lock(|d| d.borrow_mut().update(a, b));
        if let Some(event) = event {
            channel.overwrite(event);
        }
        event
    }
}

impl<M: RawMutex> Default for SharedDecoder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> Dial for &SharedDecoder<M> {
    fn set_range(&mut self, range: DialRange) {
        self.inner.lock(|d| d.borrow_mut().set_range(range));
    }

    fn set_position(&mut self, position: i16) {
        self.inner.lock(|d| d.borrow_mut().set_position(position));
    }

    fn position(&self) -> i16 {
        self.inner.lock(|d| d.borrow().position())
    }
}

/// Line levels `(a, b)` for one full detent, starting from the rest state
#[cfg(test)]
pub(crate) fn detent(direction: Direction) -> [(bool, bool); 4] {
    match direction {
        Direction::Increasing => [(false, true), (false, false), (true, false), (true, true)],
        Direction::Decreasing => [(true, false), (false, false), (false, true), (true, true)],
    }
}

/// Feed one full detent and return the last event produced
#[cfg(test)]
pub(crate) fn turn(decoder: &mut QuadratureDecoder, direction: Direction) -> Option<InputEvent> {
    let mut event = None;
    for (a, b) in detent(direction) {
        if let Some(e) = decoder.update(a, b) {
            event = Some(e);
        }
    }
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use proptest::prelude::*;

    /// Reference table, written out code by code
    fn reference(latched: Option<Direction>, code: u8) -> Step {
        use Direction::{Decreasing as Dec, Increasing as Inc};
        match (code, latched) {
            (1, _) | (7, _) | (8, _) => Step::Latch(Inc),
            (2, _) | (4, _) | (11, _) => Step::Latch(Dec),
            (14, Some(Inc)) => Step::Commit(Inc),
            (14, _) => Step::Cancel,
            (13, Some(Dec)) => Step::Commit(Dec),
            (13, _) => Step::Cancel,
            (0, _) | (3, _) | (5, _) | (6, _) | (9, _) | (10, _) | (12, _) | (15, _) => {
                Step::Ignore
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_all_codes_match_reference() {
        for latched in [None, Some(Direction::Increasing), Some(Direction::Decreasing)] {
            for code in 0u8..16 {
                assert_eq!(step(latched, code), reference(latched, code), "code {code}");
            }
        }
    }

    #[test]
    fn test_only_terminal_codes_commit() {
        for latched in [None, Some(Direction::Increasing), Some(Direction::Decreasing)] {
            for code in 0u8..16 {
                if let Step::Commit(_) = step(latched, code) {
                    assert!(code == 13 || code == 14);
                }
            }
        }
    }

    #[test]
    fn test_increasing_detent() {
        let mut dec = QuadratureDecoder::new();
        dec.set_position(10);
        let event = turn(&mut dec, Direction::Increasing);
        assert_eq!(
            event,
            Some(InputEvent::Rotation {
                position: 11,
                direction: Direction::Increasing
            })
        );
    }

    #[test]
    fn test_decreasing_detent() {
        let mut dec = QuadratureDecoder::new();
        dec.set_position(10);
        let event = turn(&mut dec, Direction::Decreasing);
        assert_eq!(
            event,
            Some(InputEvent::Rotation {
                position: 9,
                direction: Direction::Decreasing
            })
        );
    }

    #[test]
    fn test_intermediate_edges_do_not_commit() {
        let mut dec = QuadratureDecoder::new();
        let edges = detent(Direction::Increasing);
        for &(a, b) in &edges[..3] {
            assert_eq!(dec.update(a, b), None);
        }
        assert_eq!(dec.position(), 0);
    }

    #[test]
    fn test_bounce_on_first_line_rejected() {
        // A chatters 11 -> 01 -> 11 -> 01 -> 11 without B ever moving
        let mut dec = QuadratureDecoder::new();
        for _ in 0..4 {
            assert_eq!(dec.update(false, true), None);
            assert_eq!(dec.update(true, true), None);
        }
        assert_eq!(dec.position(), 0);
    }

    #[test]
    fn test_reversal_mid_detent_commits_backwards() {
        // Half a detent forward, then back out the way we came. Code 4
        // re-latches Decreasing and 13 commits it.
        let mut dec = QuadratureDecoder::new();
        dec.set_position(5);
        assert_eq!(dec.update(false, true), None);
        assert_eq!(dec.update(false, false), None);
        assert_eq!(dec.update(false, true), None);
        assert_eq!(
            dec.update(true, true),
            Some(InputEvent::Rotation {
                position: 4,
                direction: Direction::Decreasing
            })
        );
        assert_eq!(dec.position(), 4);
    }

    #[test]
    fn test_clamps_without_wrap() {
        let mut dec = QuadratureDecoder::new();
        dec.set_range(DialRange::new(0, 3, 1, false).unwrap());
        dec.set_position(3);
        let event = turn(&mut dec, Direction::Increasing);
        assert_eq!(dec.position(), 3);
        // A clamped detent is still reported so the consumer sees intent
        assert!(event.is_some());

        dec.set_position(0);
        turn(&mut dec, Direction::Decreasing);
        assert_eq!(dec.position(), 0);
    }

    #[test]
    fn test_wraps_with_unit_step() {
        let mut dec = QuadratureDecoder::new();
        dec.set_range(DialRange::HOURS);
        dec.set_position(23);
        turn(&mut dec, Direction::Increasing);
        assert_eq!(dec.position(), 0);
        turn(&mut dec, Direction::Decreasing);
        assert_eq!(dec.position(), 23);
    }

    #[test]
    fn test_range_validation() {
        assert_eq!(DialRange::new(5, 4, 1, false), Err(RangeError::Inverted));
        assert_eq!(DialRange::new(0, 4, 0, false), Err(RangeError::ZeroStep));
        assert_eq!(DialRange::new(0, 10, 2, true), Err(RangeError::WrapWithStep));
        assert!(DialRange::new(0, 10, 2, false).is_ok());
        assert!(DialRange::new(3, 3, 1, true).is_ok());
    }

    #[test]
    fn test_set_range_clamps_position() {
        let mut dec = QuadratureDecoder::new();
        dec.set_position(80);
        dec.set_range(DialRange::MINUTES);
        assert_eq!(dec.position(), 59);
    }

    #[test]
    fn test_step_size() {
        let mut dec = QuadratureDecoder::new();
        dec.set_range(DialRange::new(0, 100, 5, false).unwrap());
        dec.set_position(10);
        turn(&mut dec, Direction::Increasing);
        assert_eq!(dec.position(), 15);
        dec.set_position(98);
        turn(&mut dec, Direction::Increasing);
        assert_eq!(dec.position(), 100);
    }

    #[test]
    fn test_shared_decoder_overwrites_channel() {
        let shared: SharedDecoder<NoopRawMutex> = SharedDecoder::new();
        let channel: EventChannel<NoopRawMutex> = EventChannel::new();

        for _ in 0..3 {
            for (a, b) in detent(Direction::Increasing) {
                shared.on_edge(a, b, &channel);
            }
        }

        // Three detents, one slot: only the latest position survives
        assert_eq!(
            channel.try_receive(),
            Some(InputEvent::Rotation {
                position: 3,
                direction: Direction::Increasing
            })
        );
        assert_eq!(channel.try_receive(), None);
    }

    #[test]
    fn test_shared_decoder_as_dial() {
        let shared: SharedDecoder<NoopRawMutex> = SharedDecoder::new();
        let mut dial = &shared;
        dial.set_range(DialRange::HOURS);
        dial.set_position(7);
        assert_eq!(Dial::position(&dial), 7);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Increasing), Just(Direction::Decreasing)]
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_range(
            min in -50i16..50,
            span in 0i16..50,
            step_size in 1i16..5,
            wrap in any::<bool>(),
            turns in proptest::collection::vec(direction(), 0..64),
        ) {
            let step_size = if wrap { 1 } else { step_size };
            let range = DialRange::new(min, min + span, step_size, wrap).unwrap();
            let mut dec = QuadratureDecoder::new();
            dec.set_range(range);
            for dir in turns {
                turn(&mut dec, dir);
                prop_assert!(dec.position() >= range.min());
                prop_assert!(dec.position() <= range.max());
            }
        }

        #[test]
        fn prop_random_edges_stay_in_range(
            edges in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..256),
        ) {
            let mut dec = QuadratureDecoder::new();
            dec.set_range(DialRange::MINUTES);
            for (a, b) in edges {
                dec.update(a, b);
                prop_assert!((0..=59).contains(&dec.position()));
            }
        }
    }
}
