//! Accessory power rails
//!
//! Switched supplies for peripherals the firmware never uses (GPS, heart
//! rate sensor). They are driven low at boot and kept low.

use embedded_hal::digital::OutputPin;

/// Switched supply held off
pub struct AuxRail<P> {
    pin: P,
}

impl<P: OutputPin> AuxRail<P> {
    /// Take the enable pin and cut the rail
    pub fn off(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        debug!("accessory rail off");
        Ok(Self { pin })
    }

    /// Give the enable pin back, leaving the rail off
    pub fn release(self) -> P {
        self.pin
    }
}
