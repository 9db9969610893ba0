//! Push-button task
//!
//! Samples the button every [`SAMPLE_PERIOD_MS`] and forwards debounced
//! presses. Sends wait for the slot so a press is never lost to a busy
//! controller.

use defmt::*;
use embassy_time::{Duration, Ticker};

use bedside_core::input::debounce::SAMPLE_PERIOD_MS;
use bedside_core::input::{ButtonDebouncer, DebounceConfig};
use bedside_hal::InputPin;
use bedside_hal_rp2040::gpio::Rp2040Input;

use crate::board::BUTTON_ACTIVE_LOW;
use crate::channels::EVENTS;
use crate::wall_clock::uptime_ms;

#[embassy_executor::task]
pub async fn button_task(pin: Rp2040Input<'static>) {
    info!("Button task started");

    let config = DebounceConfig {
        active_low: BUTTON_ACTIVE_LOW,
        ..DebounceConfig::default()
    };
    let mut debouncer = match ButtonDebouncer::new(config) {
        Ok(d) => d,
        Err(e) => {
            error!("Invalid debounce config: {:?}", e);
            return;
        }
    };

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        ticker.next().await;

        if let Some(event) = debouncer.poll(pin.is_high(), uptime_ms()) {
            debug!("Button: {:?}", event);
            EVENTS.send(event).await;
        }
    }
}
