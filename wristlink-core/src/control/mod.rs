//! Control loop
//!
//! One thread, one loop: every tick runs button/backlight, connection
//! polling, time sync, notification arbitration and display derivation in
//! that order, then sleeps a fixed interval.

pub mod controller;
pub mod device;

pub use controller::{ControlLoop, TickReport};
pub use device::DeviceState;
