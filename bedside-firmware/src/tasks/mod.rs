//! Embassy async tasks
//!
//! Each task owns one peripheral or collaborator and talks to the others
//! through the statics in [`crate::channels`].

pub mod audio;
pub mod button;
pub mod controller;
pub mod display;
pub mod encoder;
pub mod network;
pub mod storage;

pub use audio::audio_task;
pub use button::button_task;
pub use controller::controller_task;
pub use display::display_task;
pub use encoder::encoder_task;
pub use network::network_task;
pub use storage::storage_task;
