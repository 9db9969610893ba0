//! Recording board for state-machine tests

use heapless::Vec;

use crate::clock::ClockTime;
use crate::config::WifiCredentials;
use crate::input::QuadratureDecoder;
use crate::traits::{
    Action, AudioPlayer, Board, DisplayDriver, Element, NetworkTime, Notice, Payload, Persistence,
};

/// Collaborator call, in the order issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Call {
    Display(Element, Payload, Action),
    Boost(bool),
    MaxBrightness(bool),
    Play(u16),
    Loop(u16),
    Stop,
    Volume(u8),
    StartPairing,
    StopPairing,
    Notify(Notice),
    SaveAlarm(ClockTime),
    SaveCredentials,
}

/// Board whose collaborators record every call and expose settable inputs
#[derive(Default)]
pub(crate) struct MockBoard {
    pub calls: Vec<Call, 256>,
    pub time: ClockTime,
    pub connected: bool,
    pub broker: bool,
    pub online: bool,
    pub lit: bool,
    pub boost: Option<bool>,
    pub max_brightness: bool,
    pub volume: u8,
    pub looping: Option<u16>,
    pub played: Option<u16>,
    pub pairing: bool,
    pub credentials: Option<WifiCredentials>,
    pub saved_alarm: Option<ClockTime>,
    pub dial: QuadratureDecoder,
}

impl MockBoard {
    fn record(&mut self, call: Call) {
        if self.calls.is_full() {
            self.calls.remove(0);
        }
        let _ = self.calls.push(call);
    }

    pub fn count_element(&self, element: Element) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Display(e, _, _) if *e == element))
            .count()
    }
}

impl DisplayDriver for MockBoard {
    fn update(&mut self, element: Element, payload: Payload, action: Action) {
        self.record(Call::Display(element, payload, action));
    }

    fn set_boost(&mut self, on: bool) {
        self.boost = Some(on);
        self.record(Call::Boost(on));
    }

    fn set_max_brightness(&mut self, on: bool) {
        self.max_brightness = on;
        self.record(Call::MaxBrightness(on));
    }

    fn is_lit(&self) -> bool {
        self.lit
    }
}

impl AudioPlayer for MockBoard {
    fn play_track(&mut self, track: u16) {
        self.played = Some(track);
        self.record(Call::Play(track));
    }

    fn loop_track(&mut self, track: u16) {
        self.looping = Some(track);
        self.record(Call::Loop(track));
    }

    fn stop(&mut self) {
        self.looping = None;
        self.record(Call::Stop);
    }

    fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
        self.record(Call::Volume(volume));
    }

    fn is_online(&self) -> bool {
        self.online
    }
}

impl NetworkTime for MockBoard {
    fn current_time(&self) -> ClockTime {
        self.time
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn is_broker_connected(&self) -> bool {
        self.broker
    }

    fn start_pairing(&mut self) {
        self.pairing = true;
        self.record(Call::StartPairing);
    }

    fn stop_pairing(&mut self) {
        self.pairing = false;
        self.record(Call::StopPairing);
    }

    fn paired_credentials(&self) -> Option<WifiCredentials> {
        self.credentials.clone()
    }

    fn notify(&mut self, notice: Notice) {
        self.record(Call::Notify(notice));
    }
}

impl Persistence for MockBoard {
    fn save_alarm_time(&mut self, time: ClockTime) {
        self.saved_alarm = Some(time);
        self.record(Call::SaveAlarm(time));
    }

    fn save_credentials(&mut self, _credentials: &WifiCredentials) {
        self.record(Call::SaveCredentials);
    }
}

impl Board for MockBoard {
    type Display = MockBoard;
    type Audio = MockBoard;
    type Network = MockBoard;
    type Storage = MockBoard;
    type Dial = QuadratureDecoder;

    fn display(&mut self) -> &mut MockBoard {
        self
    }

    fn audio(&mut self) -> &mut MockBoard {
        self
    }

    fn network(&mut self) -> &mut MockBoard {
        self
    }

    fn storage(&mut self) -> &mut MockBoard {
        self
    }

    fn dial(&mut self) -> &mut QuadratureDecoder {
        &mut self.dial
    }
}
