//! Collaborator adapters for the Pico board
//!
//! The state machine runs synchronously inside the controller task. Each
//! adapter turns its calls into commands for the task that owns the real
//! peripheral, or reads state that task publishes.
//!
//! # Pin map
//!
//! | GPIO | Function                          |
//! |------|-----------------------------------|
//! | 1    | Encoder B, pull-up                |
//! | 2    | Encoder A, pull-up                |
//! | 3    | Encoder push-button, active low   |
//!
//! # Network
//!
//! The Pico has no WiFi radio, so the link never comes up: `is_connected`
//! stays false. Every rotation in Time therefore enters WifiPairing, which
//! cannot complete and is left by rotating again, and the rotation
//! brightness boost is never reached. A Pico W build fits a CYW43 driver
//! behind the network task's radio.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::TrySendError;
use portable_atomic::Ordering;

use bedside_core::clock::ClockTime;
use bedside_core::config::WifiCredentials;
use bedside_core::input::SharedDecoder;
use bedside_core::traits::{
    Action, AudioPlayer, Board, DisplayDriver, Element, NetworkTime, Notice, Payload, Persistence,
};

use crate::channels::{
    AudioCommand, DisplayCommand, NetCommand, StoreRequest, AUDIO_CMD, AUDIO_ONLINE, DISPLAY_CMD,
    LINK, NET_CMD, PAIRED, STORE_REQ,
};
use crate::wall_clock;

/// Push-button reads low while pressed
pub const BUTTON_ACTIVE_LOW: bool = true;

/// Display adapter
///
/// Brightness is tracked here so `is_lit` answers without a round trip.
#[derive(Default)]
pub struct DisplayLink {
    boosted: bool,
    max: bool,
}

impl DisplayLink {
    fn send(&self, cmd: DisplayCommand) {
        if DISPLAY_CMD.try_send(cmd).is_err() {
            warn!("Display queue full, dropped {:?}", cmd);
        }
    }
}

impl DisplayDriver for DisplayLink {
    fn update(&mut self, element: Element, payload: Payload, action: Action) {
        self.send(DisplayCommand::Update {
            element,
            payload,
            action,
        });
    }

    fn set_boost(&mut self, on: bool) {
        self.boosted = on;
        self.send(DisplayCommand::Boost(on));
    }

    fn set_max_brightness(&mut self, on: bool) {
        self.max = on;
        self.send(DisplayCommand::MaxBrightness(on));
    }

    fn is_lit(&self) -> bool {
        self.boosted || self.max
    }
}

/// Audio adapter
pub struct AudioLink;

impl AudioLink {
    fn send(&self, cmd: AudioCommand) {
        if AUDIO_CMD.try_send(cmd).is_err() {
            warn!("Audio queue full, dropped {:?}", cmd);
        }
    }
}

impl AudioPlayer for AudioLink {
    fn play_track(&mut self, track: u16) {
        self.send(AudioCommand::Play(track));
    }

    fn loop_track(&mut self, track: u16) {
        self.send(AudioCommand::Loop(track));
    }

    fn stop(&mut self) {
        self.send(AudioCommand::Stop);
    }

    fn set_volume(&mut self, volume: u8) {
        self.send(AudioCommand::Volume(volume));
    }

    fn is_online(&self) -> bool {
        AUDIO_ONLINE.load(Ordering::Relaxed)
    }
}

/// Network adapter
pub struct NetworkLink;

impl NetworkLink {
    fn send(&self, cmd: NetCommand) {
        if NET_CMD.try_send(cmd).is_err() {
            warn!("Network queue full, dropped {:?}", cmd);
        }
    }
}

impl NetworkTime for NetworkLink {
    fn current_time(&self) -> ClockTime {
        wall_clock::now()
    }

    fn is_connected(&self) -> bool {
        LINK.lock(|l| l.get().connected)
    }

    fn is_broker_connected(&self) -> bool {
        LINK.lock(|l| l.get().broker)
    }

    fn start_pairing(&mut self) {
        self.send(NetCommand::StartPairing);
    }

    fn stop_pairing(&mut self) {
        self.send(NetCommand::StopPairing);
    }

    fn paired_credentials(&self) -> Option<WifiCredentials> {
        PAIRED.lock(|p| p.borrow().clone())
    }

    fn notify(&mut self, notice: Notice) {
        self.send(NetCommand::Notify(notice));
    }
}

/// Persistence adapter, writes happen in the storage task
pub struct StorageLink;

impl StorageLink {
    fn send(&self, req: StoreRequest) {
        if let Err(TrySendError::Full(req)) = STORE_REQ.try_send(req) {
            error!("Storage queue full, lost {:?}", req);
        }
    }
}

impl Persistence for StorageLink {
    fn save_alarm_time(&mut self, time: ClockTime) {
        self.send(StoreRequest::AlarmTime(time));
    }

    fn save_credentials(&mut self, credentials: &WifiCredentials) {
        self.send(StoreRequest::Credentials(credentials.clone()));
    }
}

/// All collaborators handed to the state machine
pub struct FirmwareBoard {
    display: DisplayLink,
    audio: AudioLink,
    network: NetworkLink,
    storage: StorageLink,
    dial: &'static SharedDecoder<CriticalSectionRawMutex>,
}

impl FirmwareBoard {
    pub fn new(dial: &'static SharedDecoder<CriticalSectionRawMutex>) -> Self {
        Self {
            display: DisplayLink::default(),
            audio: AudioLink,
            network: NetworkLink,
            storage: StorageLink,
            dial,
        }
    }
}

impl Board for FirmwareBoard {
    type Display = DisplayLink;
    type Audio = AudioLink;
    type Network = NetworkLink;
    type Storage = StorageLink;
    type Dial = &'static SharedDecoder<CriticalSectionRawMutex>;

    fn display(&mut self) -> &mut DisplayLink {
        &mut self.display
    }

    fn audio(&mut self) -> &mut AudioLink {
        &mut self.audio
    }

    fn network(&mut self) -> &mut NetworkLink {
        &mut self.network
    }

    fn storage(&mut self) -> &mut StorageLink {
        &mut self.storage
    }

    fn dial(&mut self) -> &mut Self::Dial {
        &mut self.dial
    }
}
