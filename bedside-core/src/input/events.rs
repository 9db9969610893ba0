//! Input events delivered to the clock state machine

/// Direction of a committed encoder detent
///
/// The decoder tracks an undecided direction internally as `None`; only
/// committed directions ever leave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise, position increases
    Increasing,
    /// Counter-clockwise, position decreases
    Decreasing,
}

impl Direction {
    /// The other direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Increasing => Direction::Decreasing,
            Direction::Decreasing => Direction::Increasing,
        }
    }
}

/// Semantic user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Encoder moved one detent; `position` is the accumulated dial value
    Rotation {
        position: i16,
        direction: Direction,
    },
    /// Button released before the long-press threshold
    ShortPress,
    /// Button held for the long-press threshold
    LongPress,
}
