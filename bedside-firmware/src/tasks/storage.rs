//! Storage task
//!
//! Serializes flash writes requested by the state machine.

use defmt::*;

use bedside_core::config::ConfigStore;
use bedside_hal_rp2040::flash::Rp2040FlashStorage;

use crate::channels::{StoreRequest, STORE_REQ};

#[embassy_executor::task]
pub async fn storage_task(mut store: ConfigStore<Rp2040FlashStorage<'static>>) {
    info!("Storage task started");

    loop {
        let request = STORE_REQ.receive().await;
        let result = match &request {
            StoreRequest::AlarmTime(time) => store.save_alarm_time(*time).await,
            StoreRequest::Credentials(credentials) => store.save_credentials(credentials).await,
        };

        match result {
            Ok(()) => debug!("Saved {:?}", request),
            Err(e) => error!("Failed to save {:?}: {:?}", request, e),
        }
    }
}
