//! Controller task
//!
//! Owns the clock state machine. Input events are dispatched as they
//! arrive; otherwise the machine is ticked every [`POLL_MS`].

use defmt::*;
use embassy_time::{with_timeout, Duration};

use bedside_core::config::Persisted;
use bedside_core::ClockMachine;

use crate::board::FirmwareBoard;
use crate::channels::{DIAL, EVENTS};
use crate::wall_clock::uptime_ms;

/// Idle tick period
const POLL_MS: u64 = 10;

#[embassy_executor::task]
pub async fn controller_task(persisted: Persisted) {
    info!("Controller task started");

    let mut machine = ClockMachine::new(FirmwareBoard::new(&DIAL), &persisted, uptime_ms());
    info!("Alarm {:?}, state {:?}", machine.alarm_time(), machine.state());

    let mut state = machine.state();

    loop {
        if let Ok(event) = with_timeout(Duration::from_millis(POLL_MS), EVENTS.receive()).await {
            debug!("Input event: {:?}", event);
            machine.dispatch(event, uptime_ms());
        }
        machine.tick(uptime_ms());

        if machine.state() != state {
            info!("State {:?} -> {:?}", state, machine.state());
            state = machine.state();
        }
    }
}
