//! Board-agnostic core logic for the bedside alarm clock
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Quadrature decoding and button debouncing
//! - The single-slot input event channel
//! - The clock state machine and its one-shot timer
//! - Collaborator traits (display, audio, network, persistence)
//! - Persisted data types and their flash encoding
//! - Network reconnect policy

#![no_std]
#![deny(unsafe_code)]

pub mod channel;
pub mod clock;
pub mod config;
pub mod input;
pub mod net;
pub mod state;
pub mod traits;

pub use channel::EventChannel;
pub use clock::ClockTime;
pub use input::{Direction, InputEvent};
pub use state::{ClockMachine, StateId};
