//! Peripheral gateway
//!
//! Thin boundary over the battery sensor, charge-status pins, haptic motor,
//! backlight, button and clocks. Effectors are idempotent.

use crate::time::DateTime;

/// Battery or charge pin read fault
///
/// Indicates a hardware failure; the control loop propagates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion failed
    AdcFault,
    /// Digital pin read failed
    PinFault,
}

/// Charger status pins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChargeState {
    /// External power is present and the charger is active
    pub charging: bool,
    /// Charger reports charge complete
    pub fully_charged: bool,
}

/// Trait for the wall clock
pub trait RealTimeClock {
    /// Current local time
    fn now(&mut self) -> DateTime;

    /// Commit a new local time
    fn set(&mut self, time: DateTime);
}

/// Trait for a monotonic millisecond counter
pub trait Monotonic {
    /// Milliseconds since an arbitrary fixed point; never goes backwards
    fn now_ms(&self) -> u64;
}

/// Trait for heap headroom reporting
pub trait MemoryProbe {
    /// Consolidate free memory before sampling
    ///
    /// Allocators without a compaction pass leave this as a no-op.
    fn compact(&mut self) {}

    /// Free heap bytes
    fn free_bytes(&mut self) -> u32;
}

/// All peripherals the control loop touches
pub trait PeripheralGateway {
    /// Check if the user button is held
    fn read_button(&mut self) -> Result<bool, SensorError>;

    /// Turn the backlight on or off
    ///
    /// Setting the state it is already in must not re-initialize it. An
    /// error means the backlight kept its previous state.
    fn set_backlight(&mut self, on: bool) -> Result<(), SensorError>;

    /// Battery voltage in millivolts
    fn read_battery_mv(&mut self) -> Result<u16, SensorError>;

    /// Charger status pins
    fn read_charge_pins(&mut self) -> Result<ChargeState, SensorError>;

    /// Drive the haptic motor
    fn set_haptic(&mut self, on: bool);

    /// Current wall-clock time
    fn get_clock(&mut self) -> DateTime;

    /// Commit a new wall-clock time
    fn set_clock(&mut self, time: DateTime);

    /// Monotonic milliseconds for rate limiting
    fn uptime_ms(&mut self) -> u64;

    /// Consolidate free heap before sampling it
    fn compact_memory(&mut self) {}

    /// Free heap bytes
    fn free_memory(&mut self) -> u32;

    /// Pulse the haptic motor once
    fn pulse_haptic(&mut self) {
        self.set_haptic(true);
        self.set_haptic(false);
    }
}
