//! Device state
//!
//! Every piece of mutable state the loop carries between ticks, owned in
//! one place and handed to each component in turn.

use crate::config::DeviceConfig;
use crate::display::DisplayState;
use crate::notification::{ActiveSet, NotificationArbiter};
use crate::power::BatteryMonitor;
use crate::time::TimeSynchronizer;

/// Mutable state owned by the control loop
#[derive(Debug, Clone)]
pub struct DeviceState {
    /// Dedup set and current pick
    pub arbiter: NotificationArbiter,
    /// Last peer time exchange
    pub sync: TimeSynchronizer,
    /// Last battery/memory sample
    pub battery: BatteryMonitor,
    /// Derived display fields and dirty mask
    pub display: DisplayState,
    /// Peer's active set as of this tick
    pub active: ActiveSet,
    /// Backlight state last commanded
    pub backlight_on: bool,
}

impl DeviceState {
    /// Create the power-on state
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            arbiter: NotificationArbiter::new(),
            sync: TimeSynchronizer::new(config.time_sync_interval_ms()),
            battery: BatteryMonitor::new(config.battery_sample_interval_ms()),
            display: DisplayState::new(),
            active: ActiveSet::new(),
            backlight_on: false,
        }
    }
}
