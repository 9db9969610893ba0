//! RP2040-specific HAL for the alarm clock firmware
//!
//! Implements the shared `bedside-hal` traits on embassy-rp peripherals:
//!
//! - Flash storage driver (implements `bedside_hal::FlashStorage`)
//! - GPIO inputs for the encoder and button (implements
//!   `bedside_hal::InputPin` and `bedside_hal::EdgeInput`)

#![no_std]

pub mod flash;
pub mod gpio;

// Re-export shared traits from bedside-hal for convenience
pub use bedside_hal::{EdgeInput, InputPin, StorageKey};
