//! Display task
//!
//! Drains display commands. Rendering belongs to the panel driver; this
//! board has none fitted, so commands are traced.

use defmt::*;

use crate::channels::{DisplayCommand, DISPLAY_CMD};

#[embassy_executor::task]
pub async fn display_task() {
    info!("Display task started");

    loop {
        match DISPLAY_CMD.receive().await {
            DisplayCommand::Update {
                element,
                payload,
                action,
            } => trace!("Display {:?} {:?} {:?}", element, action, payload),
            DisplayCommand::Boost(on) => debug!("Display boost {}", on),
            DisplayCommand::MaxBrightness(on) => debug!("Display max brightness {}", on),
        }
    }
}
