//! User button
//!
//! Momentary switch to ground with a pull-up, so pressed reads low.

use embedded_hal::digital::InputPin;
use wristlink_core::traits::SensorError;

/// Active-low push button
pub struct Button<P> {
    pin: P,
}

impl<P: InputPin> Button<P> {
    /// Wrap a pulled-up input pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Check if the button is held down
    pub fn is_pressed(&mut self) -> Result<bool, SensorError> {
        self.pin.is_low().map_err(|_| SensorError::PinFault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    struct MockInput {
        high: bool,
    }

    impl ErrorType for MockInput {
        type Error = Infallible;
    }

    impl InputPin for MockInput {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    struct BrokenInput;

    impl ErrorType for BrokenInput {
        type Error = ErrorKind;
    }

    impl InputPin for BrokenInput {
        fn is_high(&mut self) -> Result<bool, ErrorKind> {
            Err(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, ErrorKind> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn test_pressed_reads_low() {
        let mut button = Button::new(MockInput { high: true });
        assert_eq!(button.is_pressed(), Ok(false));

        button.pin.high = false;
        assert_eq!(button.is_pressed(), Ok(true));
    }

    #[test]
    fn test_pin_error_is_pin_fault() {
        let mut button = Button::new(BrokenInput);
        assert_eq!(button.is_pressed(), Err(SensorError::PinFault));
    }
}
