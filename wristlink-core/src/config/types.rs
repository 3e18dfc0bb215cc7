//! Configuration type definitions
//!
//! Capacity limits for the fixed-size containers used throughout the crate,
//! plus the timing parameters of the control loop.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::priority::ArbiterConfig;

/// Maximum bundle identifier length
pub const APP_ID_LEN: usize = 64;

/// Maximum notification title length
pub const TITLE_LEN: usize = 64;

/// Maximum notification message length
pub const MESSAGE_LEN: usize = 256;

/// Maximum notifications read from the peer per tick
pub const MAX_ACTIVE_NOTIFICATIONS: usize = 16;

/// Maximum notification ids remembered per connection session
pub const MAX_KNOWN_NOTIFICATIONS: usize = 64;

/// Maximum rows in the body region
pub const BODY_LINES: usize = 4;

/// Maximum characters per body row
pub const BODY_LINE_LEN: usize = 64;

/// Maximum rules in the priority table
pub const MAX_PRIORITY_RULES: usize = 8;

/// Default control loop period
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 250;

/// Default minimum spacing between peer time exchanges
pub const DEFAULT_TIME_SYNC_INTERVAL_S: u32 = 60 * 60;

/// Default minimum spacing between battery/memory samples
pub const DEFAULT_BATTERY_SAMPLE_INTERVAL_S: u32 = 60 * 5;

/// Device configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    /// Control loop period (ms)
    pub tick_interval_ms: u32,
    /// Peer time is pulled at most once per this many seconds
    pub time_sync_interval_s: u32,
    /// Battery voltage and free memory are sampled at most once per this many seconds
    pub battery_sample_interval_s: u32,
    /// Notification scoring rules
    pub arbiter: ArbiterConfig,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            time_sync_interval_s: DEFAULT_TIME_SYNC_INTERVAL_S,
            battery_sample_interval_s: DEFAULT_BATTERY_SAMPLE_INTERVAL_S,
            arbiter: ArbiterConfig::default(),
        }
    }
}

impl DeviceConfig {
    /// Time sync interval in milliseconds
    pub fn time_sync_interval_ms(&self) -> u64 {
        self.time_sync_interval_s as u64 * 1000
    }

    /// Battery sample interval in milliseconds
    pub fn battery_sample_interval_ms(&self) -> u64 {
        self.battery_sample_interval_s as u64 * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let config = DeviceConfig::default();
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.time_sync_interval_ms(), 3_600_000);
        assert_eq!(config.battery_sample_interval_ms(), 300_000);
    }
}
