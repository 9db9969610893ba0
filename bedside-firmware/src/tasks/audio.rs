//! Audio task
//!
//! Drains audio commands and reports the player online. The serial player
//! protocol is not implemented here; commands are logged.

use defmt::*;
use portable_atomic::Ordering;

use bedside_core::traits::audio::MAX_VOLUME;

use crate::channels::{AudioCommand, AUDIO_CMD, AUDIO_ONLINE};

#[embassy_executor::task]
pub async fn audio_task() {
    info!("Audio task started");
    AUDIO_ONLINE.store(true, Ordering::Relaxed);

    loop {
        match AUDIO_CMD.receive().await {
            AudioCommand::Play(track) => info!("Play track {}", track),
            AudioCommand::Loop(track) => info!("Loop track {}", track),
            AudioCommand::Stop => info!("Stop playback"),
            AudioCommand::Volume(v) => debug!("Volume {}/{}", v.min(MAX_VOLUME), MAX_VOLUME),
        }
    }
}
