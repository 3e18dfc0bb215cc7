//! Charger status pins
//!
//! The charger IC exposes two open-drain status lines: one pulled up that
//! goes low while charging, and one pulled down that goes high when the
//! cell is full.

use embedded_hal::digital::InputPin;
use wristlink_core::traits::{ChargeState, SensorError};

/// Charger status inputs
pub struct ChargePins<C, D> {
    /// Low while charging
    charging: C,
    /// High once charge is complete
    complete: D,
}

impl<C: InputPin, D: InputPin> ChargePins<C, D> {
    /// Wrap the two status inputs
    pub fn new(charging: C, complete: D) -> Self {
        Self { charging, complete }
    }

    /// Read both status lines
    pub fn read(&mut self) -> Result<ChargeState, SensorError> {
        let charging = self.charging.is_low().map_err(|_| SensorError::PinFault)?;
        let fully_charged = self
            .complete
            .is_high()
            .map_err(|_| SensorError::PinFault)?;
        Ok(ChargeState {
            charging,
            fully_charged,
        })
    }
}
