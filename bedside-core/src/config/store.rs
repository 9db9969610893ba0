//! Configuration persistence
//!
//! Reads and writes the persisted records through any [`FlashStorage`].
//! A missing record on first boot is recovered by writing defaults and
//! reading back once.

use bedside_hal::{FlashError, FlashStorage, StorageKey};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{Persisted, Settings, WifiCredentials};
use crate::clock::ClockTime;

/// Largest encoded record (credentials: two length-prefixed strings)
const MAX_RECORD_SIZE: usize = 128;

/// Configuration persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Flash operation failed
    Flash(FlashError),
    /// Serialization failed
    Encode,
    /// Deserialization failed
    Decode,
}

impl From<FlashError> for StoreError {
    fn from(e: FlashError) -> Self {
        StoreError::Flash(e)
    }
}

/// Configuration persistence manager
pub struct ConfigStore<S: FlashStorage> {
    storage: S,
}

impl<S: FlashStorage> ConfigStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    fn into_storage(self) -> S {
        self.storage
    }

    async fn read_record<T: DeserializeOwned>(&mut self, key: StorageKey) -> Result<T, StoreError> {
        let mut buffer = [0u8; MAX_RECORD_SIZE];
        let len = self.storage.read(key, &mut buffer).await?;
        let record = buffer.get(..len).ok_or(StoreError::Decode)?;
        postcard::from_bytes(record).map_err(|_| StoreError::Decode)
    }

    async fn write_record<T: Serialize>(&mut self, key: StorageKey, value: &T) -> Result<(), StoreError> {
        let mut buffer = [0u8; MAX_RECORD_SIZE];
        let encoded = postcard::to_slice(value, &mut buffer).map_err(|_| StoreError::Encode)?;
        self.storage.write(key, encoded).await?;
        Ok(())
    }

    /// Load all records
    ///
    /// Alarm time and settings are required; missing credentials are not
    /// an error.
    pub async fn load(&mut self) -> Result<Persisted, StoreError> {
        let alarm_time: ClockTime = self.read_record(StorageKey::AlarmTime).await?;
        let alarm_time =
            ClockTime::new(alarm_time.hour, alarm_time.minute).ok_or(StoreError::Decode)?;
        let settings = self.read_record(StorageKey::Settings).await?;
        let credentials = self.load_credentials().await?;
        Ok(Persisted {
            alarm_time,
            settings,
            credentials,
        })
    }

    /// Write the default alarm time and settings
    pub async fn write_defaults(&mut self) -> Result<(), StoreError> {
        let defaults = Persisted::default();
        self.save_alarm_time(defaults.alarm_time).await?;
        self.save_settings(&defaults.settings).await
    }

    /// Load all records, initializing flash on first boot
    ///
    /// On [`FlashError::NotFound`] defaults are written and the records are
    /// read back exactly once. Any other failure, or a failed read-back, is
    /// returned to the caller.
    pub async fn restore_or_init(&mut self) -> Result<Persisted, StoreError> {
        match self.load().await {
            Err(StoreError::Flash(FlashError::NotFound)) => {
                self.write_defaults().await?;
                self.load().await
            }
            other => other,
        }
    }

    pub async fn save_alarm_time(&mut self, time: ClockTime) -> Result<(), StoreError> {
        self.write_record(StorageKey::AlarmTime, &time).await
    }

    pub async fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.write_record(StorageKey::Settings, settings).await
    }

    pub async fn save_credentials(&mut self, credentials: &WifiCredentials) -> Result<(), StoreError> {
        self.write_record(StorageKey::WifiCredentials, credentials).await
    }

    /// Load stored credentials, `None` if never paired
    pub async fn load_credentials(&mut self) -> Result<Option<WifiCredentials>, StoreError> {
        match self.read_record(StorageKey::WifiCredentials).await {
            Ok(credentials) => Ok(Some(credentials)),
            Err(StoreError::Flash(FlashError::NotFound)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
