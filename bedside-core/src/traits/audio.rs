//! Audio player collaborator

/// Loudest volume the player accepts
pub const MAX_VOLUME: u8 = 30;

/// Track played after the alarm time was changed
pub const CONFIRMATION_TRACK: u16 = 101;

/// Volume for the confirmation tone
pub const CONFIRMATION_VOLUME: u8 = 10;

/// Trait for the MP3 player module
///
/// Commands are queued to the player; none of them wait for playback.
pub trait AudioPlayer {
    /// Play a track once
    fn play_track(&mut self, track: u16);

    /// Play a track repeatedly until stopped
    fn loop_track(&mut self, track: u16);

    fn stop(&mut self);

    /// Set the volume, `0..=MAX_VOLUME`
    fn set_volume(&mut self, volume: u8);

    /// True when the player answered its last status query
    fn is_online(&self) -> bool;
}
