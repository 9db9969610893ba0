//! GPIO pin abstractions
//!
//! The button debouncer and the quadrature decoder only ever read levels.
//! The encoder lines additionally need to wake a task on every edge.

/// Digital input pin
///
/// Implementations read the raw electrical level. Polarity (active-low
/// buttons with pull-ups) is applied by the consumer, not here.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Input pin that can wait for a level change
pub trait EdgeInput: InputPin {
    /// Wait for a rising or falling edge
    fn wait_for_any_edge(&mut self) -> impl core::future::Future<Output = ()>;
}

/// Snapshot both lines of a quadrature pair in one call
///
/// Returns `(a, b)`. Reading them back to back keeps the window between
/// the two samples as small as the hardware allows.
pub fn read_pair<A: InputPin, B: InputPin>(a: &A, b: &B) -> (bool, bool) {
    (a.is_high(), b.is_high())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FakePin(Cell<bool>);

    impl InputPin for FakePin {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_is_low_is_inverse() {
        let pin = FakePin(Cell::new(true));
        assert!(!pin.is_low());
        pin.0.set(false);
        assert!(pin.is_low());
    }

    #[test]
    fn test_read_pair_order() {
        let a = FakePin(Cell::new(true));
        let b = FakePin(Cell::new(false));
        assert_eq!(read_pair(&a, &b), (true, false));
    }
}
