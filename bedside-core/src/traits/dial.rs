//! Rotary dial control

pub use crate::input::DialRange;

/// Trait for seeding and reading the rotary encoder position
///
/// States that edit a value set the range and seed the position; rotation
/// events then carry the updated position.
pub trait Dial {
    /// Replace the range, clamping the current position into it
    fn set_range(&mut self, range: DialRange);

    /// Force the position, clamped into the current range
    fn set_position(&mut self, position: i16);

    fn position(&self) -> i16;
}
