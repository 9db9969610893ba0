//! Bedside - Alarm Clock Firmware
//!
//! Main firmware binary for the RP2040-based bedside alarm clock. Restores
//! the persisted alarm and settings, then hands every peripheral to its own
//! task. The clock state machine runs in the controller task.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use bedside_core::config::ConfigStore;
use bedside_hal_rp2040::flash::Rp2040FlashStorage;
use bedside_hal_rp2040::gpio::Rp2040Input;

mod board;
mod channels;
mod tasks;
mod wall_clock;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Bedside firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Restore alarm time and settings, writing defaults on first boot
    let mut store = ConfigStore::new(Rp2040FlashStorage::new(p.FLASH, p.DMA_CH0));
    let persisted = match store.restore_or_init().await {
        Ok(persisted) => persisted,
        Err(e) => defmt::panic!("Configuration storage unusable: {:?}", e),
    };
    info!(
        "Restored alarm {:?}, paired: {}",
        persisted.alarm_time,
        persisted.credentials.is_some()
    );

    // Pin assignments: see board.rs
    let encoder_a = Rp2040Input::pull_up(p.PIN_2);
    let encoder_b = Rp2040Input::pull_up(p.PIN_1);
    let button = Rp2040Input::pull_up(p.PIN_3);
    info!("Input pins initialized");

    let credentials = persisted.credentials.clone();

    spawner.spawn(tasks::display_task()).unwrap();
    spawner.spawn(tasks::audio_task()).unwrap();
    spawner.spawn(tasks::storage_task(store)).unwrap();
    spawner.spawn(tasks::network_task(credentials)).unwrap();
    spawner.spawn(tasks::encoder_task(encoder_a, encoder_b)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::controller_task(persisted)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
