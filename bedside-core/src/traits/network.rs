//! Network and time collaborator

use crate::clock::ClockTime;
use crate::config::WifiCredentials;

/// Notification published to the home automation broker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    AlarmTriggered,
    AlarmStopped,
}

/// Trait for the network link, time source and pairing
pub trait NetworkTime {
    /// Local wall-clock time
    fn current_time(&self) -> ClockTime;

    fn is_connected(&self) -> bool;

    fn is_broker_connected(&self) -> bool;

    /// Start credential provisioning
    fn start_pairing(&mut self);

    /// Abort credential provisioning
    fn stop_pairing(&mut self);

    /// Credentials obtained by the last pairing
    fn paired_credentials(&self) -> Option<WifiCredentials>;

    /// Publish a notification, dropped when the broker is offline
    fn notify(&mut self, notice: Notice);
}
