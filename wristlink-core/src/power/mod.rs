//! Battery and memory headroom sampling

pub mod battery;

pub use battery::{BatteryMonitor, BatteryReading, BatterySample, BatteryStatus};
