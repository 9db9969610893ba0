//! Configuration type definitions
//!
//! Each record is serialized with postcard and stored under its own key,
//! so a settings change never rewrites the credentials.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;

/// Maximum SSID length (802.11)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WPA2 passphrase length
pub const MAX_PASSWORD_LEN: usize = 64;

/// Alarm time used until the user sets one
pub const DEFAULT_ALARM_TIME: ClockTime = ClockTime { hour: 7, minute: 0 };

/// User-tunable alarm behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Timer firings (500 ms each) per volume step while ringing
    pub crescendo_factor: u8,
    /// Snooze length in seconds
    pub snooze_s: u16,
    /// Play the confirmation tone after editing the alarm
    pub sounds_enabled: bool,
    /// Track looped while the alarm rings
    pub melody: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            crescendo_factor: 6,
            snooze_s: 300,
            sounds_enabled: false,
            melody: 1,
        }
    }
}

impl Settings {
    /// Crescendo factor with 0 treated as 1
    pub fn crescendo_steps(&self) -> u8 {
        self.crescendo_factor.max(1)
    }
}

/// Network credentials obtained by pairing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WifiCredentials {
    pub ssid: String<MAX_SSID_LEN>,
    pub password: String<MAX_PASSWORD_LEN>,
}

// Never log the password
#[cfg(feature = "defmt")]
impl defmt::Format for WifiCredentials {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "WifiCredentials {{ ssid: {=str} }}", self.ssid.as_str());
    }
}

/// Everything restored from flash at boot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Persisted {
    pub alarm_time: ClockTime,
    pub settings: Settings,
    /// Absent until the first successful pairing
    pub credentials: Option<WifiCredentials>,
}

impl Default for Persisted {
    fn default() -> Self {
        Self {
            alarm_time: DEFAULT_ALARM_TIME,
            settings: Settings::default(),
            credentials: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Persisted::default();
        assert_eq!(p.alarm_time, ClockTime::new(7, 0).unwrap());
        assert_eq!(p.settings.crescendo_factor, 6);
        assert_eq!(p.settings.snooze_s, 300);
        assert!(!p.settings.sounds_enabled);
        assert_eq!(p.settings.melody, 1);
        assert!(p.credentials.is_none());
    }

    #[test]
    fn test_zero_crescendo_treated_as_one() {
        let s = Settings {
            crescendo_factor: 0,
            ..Settings::default()
        };
        assert_eq!(s.crescendo_steps(), 1);
    }
}
