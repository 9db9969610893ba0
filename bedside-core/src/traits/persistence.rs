//! Persistence collaborator

use crate::clock::ClockTime;
use crate::config::WifiCredentials;

/// Trait for queuing writes to flash
///
/// The state machine runs in a non-async control loop; implementations
/// hand the record to a storage task and return immediately.
pub trait Persistence {
    fn save_alarm_time(&mut self, time: ClockTime);

    fn save_credentials(&mut self, credentials: &WifiCredentials);
}
