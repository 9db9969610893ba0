//! Collaborator traits
//!
//! These traits define the interface between the clock state machine and
//! the hardware or services it drives. All of them are synchronous and
//! non-blocking; the firmware implements them as thin adapters that queue
//! work for dedicated tasks.

pub mod audio;
pub mod dial;
pub mod display;
pub mod network;
pub mod persistence;

pub use audio::AudioPlayer;
pub use dial::Dial;
pub use display::{Action, DisplayDriver, DisplayExt, Element, Field, Payload};
pub use network::{NetworkTime, Notice};
pub use persistence::Persistence;

/// Bundle of collaborators handed to the state machine
pub trait Board {
    type Display: DisplayDriver;
    type Audio: AudioPlayer;
    type Network: NetworkTime;
    type Storage: Persistence;
    type Dial: Dial;

    fn display(&mut self) -> &mut Self::Display;
    fn audio(&mut self) -> &mut Self::Audio;
    fn network(&mut self) -> &mut Self::Network;
    fn storage(&mut self) -> &mut Self::Storage;
    fn dial(&mut self) -> &mut Self::Dial;
}
