//! Haptic motor
//!
//! Vibration motor switched through a transistor on a GPIO pin.

use embedded_hal::digital::OutputPin;

/// Haptic motor on an active-high output
pub struct GpioHaptic<P> {
    pin: P,
    /// Current logical state (true = motor running)
    on: bool,
    /// Completed on/off pulses
    pulses: u32,
}

impl<P: OutputPin> GpioHaptic<P> {
    /// Wrap an output pin, starting with the motor stopped
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self {
            pin,
            on: false,
            pulses: 0,
        })
    }

    /// Start or stop the motor
    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on == self.on {
            return Ok(());
        }

        if on {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
            self.pulses = self.pulses.wrapping_add(1);
        }
        self.on = on;
        Ok(())
    }

    /// Check if the motor is running
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Pulses completed since power-on
    pub fn pulses(&self) -> u32 {
        self.pulses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    struct MockOutput {
        high: bool,
    }

    impl ErrorType for MockOutput {
        type Error = Infallible;
    }

    impl OutputPin for MockOutput {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_starts_stopped() {
        let haptic = GpioHaptic::new(MockOutput { high: true }).unwrap();
        assert!(!haptic.is_on());
        assert!(!haptic.pin.high);
    }

    #[test]
    fn test_pulse_counts_falling_edges() {
        let mut haptic = GpioHaptic::new(MockOutput { high: false }).unwrap();

        haptic.set(true).unwrap();
        assert!(haptic.pin.high);
        assert_eq!(haptic.pulses(), 0);

        haptic.set(false).unwrap();
        assert!(!haptic.pin.high);
        assert_eq!(haptic.pulses(), 1);

        // Already off
        haptic.set(false).unwrap();
        assert_eq!(haptic.pulses(), 1);
    }
}
