//! GPIO inputs for RP2040
//!
//! Wraps embassy-rp [`Input`] so the firmware tasks can be written against
//! the `bedside-hal` pin traits.

use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_rp::Peri;

/// Pulled-up input pin
pub struct Rp2040Input<'d> {
    pin: Input<'d>,
}

impl<'d> Rp2040Input<'d> {
    /// Configure `pin` as an input with the internal pull-up enabled
    ///
    /// The encoder contacts and the button switch to ground.
    pub fn pull_up(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }
}

impl bedside_hal::InputPin for Rp2040Input<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl bedside_hal::EdgeInput for Rp2040Input<'_> {
    async fn wait_for_any_edge(&mut self) {
        self.pin.wait_for_any_edge().await;
    }
}
