use std::time::SystemTime;

use super::{band::Band, security::Security};

/// Display name used when a network does not advertise its SSID.
pub const HIDDEN_SSID: &str = "<hidden>";

/// One access point as reported by a single scan cycle.
///
/// Records are rebuilt on every scan; anything that has to outlive a cycle
/// belongs to the session tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// Canonical uppercase `AA:BB:CC:DD:EE:FF` form.
    pub bssid: String,
    pub ssid: String,
    /// Signal strength in dBm.
    pub signal: i32,
    /// Carrier frequency in MHz.
    pub frequency: u32,
    pub channel: u32,
    pub security: Security,
    pub observed_at: SystemTime,
}

impl Network {
    pub fn is_hidden(&self) -> bool {
        self.ssid == HIDDEN_SSID
    }

    pub fn band(&self) -> Band {
        Band::from_frequency(self.frequency)
    }

    /// Field equality that ignores `observed_at`.
    pub fn same_reading(&self, other: &Network) -> bool {
        self.bssid == other.bssid
            && self.ssid == other.ssid
            && self.signal == other.signal
            && self.frequency == other.frequency
            && self.channel == other.channel
            && self.security == other.security
    }
}
