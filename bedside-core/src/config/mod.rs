//! Persisted configuration
//!
//! User settings, the alarm time and WiFi credentials, stored in flash as
//! postcard binary records under separate [`StorageKey`]s.
//!
//! [`StorageKey`]: bedside_hal::StorageKey

pub mod store;
pub mod types;

pub use store::{ConfigStore, StoreError};
pub use types::*;
