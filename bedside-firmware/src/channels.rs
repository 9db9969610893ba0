//! Inter-task communication channels
//!
//! Defines the statics shared between Embassy tasks. The input path uses
//! the single-slot [`EventChannel`]; collaborator commands use bounded
//! embassy-sync channels drained by their own tasks.

use core::cell::{Cell, RefCell};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use portable_atomic::AtomicBool;

use bedside_core::clock::ClockTime;
use bedside_core::config::WifiCredentials;
use bedside_core::input::SharedDecoder;
use bedside_core::traits::{Action, Element, Notice, Payload};
use bedside_core::EventChannel;

/// Channel capacity for display commands
const DISPLAY_CHANNEL_SIZE: usize = 16;

/// Channel capacity for audio commands
const AUDIO_CHANNEL_SIZE: usize = 8;

/// Channel capacity for flash writes
const STORE_CHANNEL_SIZE: usize = 4;

/// Channel capacity for network commands
const NET_CHANNEL_SIZE: usize = 4;

/// Input events: rotation from the encoder edge handler, presses from the
/// button task
pub static EVENTS: EventChannel<CriticalSectionRawMutex> = EventChannel::new();

/// Quadrature decoder shared by the encoder task and the controller
pub static DIAL: SharedDecoder<CriticalSectionRawMutex> = SharedDecoder::new();

/// Display command
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand {
    Update {
        element: Element,
        payload: Payload,
        action: Action,
    },
    Boost(bool),
    MaxBrightness(bool),
}

pub static DISPLAY_CMD: Channel<CriticalSectionRawMutex, DisplayCommand, DISPLAY_CHANNEL_SIZE> =
    Channel::new();

/// Audio player command
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioCommand {
    Play(u16),
    Loop(u16),
    Stop,
    Volume(u8),
}

pub static AUDIO_CMD: Channel<CriticalSectionRawMutex, AudioCommand, AUDIO_CHANNEL_SIZE> =
    Channel::new();

/// Set by the audio task once the player is ready
pub static AUDIO_ONLINE: AtomicBool = AtomicBool::new(false);

/// Flash write request
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreRequest {
    AlarmTime(ClockTime),
    Credentials(WifiCredentials),
}

pub static STORE_REQ: Channel<CriticalSectionRawMutex, StoreRequest, STORE_CHANNEL_SIZE> =
    Channel::new();

/// Network command
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetCommand {
    StartPairing,
    StopPairing,
    Notify(Notice),
}

pub static NET_CMD: Channel<CriticalSectionRawMutex, NetCommand, NET_CHANNEL_SIZE> =
    Channel::new();

/// Link state published by the network task
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    pub connected: bool,
    pub broker: bool,
    pub pairing: bool,
}

pub static LINK: Mutex<CriticalSectionRawMutex, Cell<LinkStatus>> = Mutex::new(Cell::new(LinkStatus {
    connected: false,
    broker: false,
    pairing: false,
}));

/// Credentials obtained by the last pairing
pub static PAIRED: Mutex<CriticalSectionRawMutex, RefCell<Option<WifiCredentials>>> =
    Mutex::new(RefCell::new(None));
