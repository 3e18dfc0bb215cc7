//! PWM backlight
//!
//! The backlight runs at a fixed, very low duty while the button is held.
//! Switching is edge-triggered: asking for the state the backlight is
//! already in leaves the PWM channel untouched.

use embedded_hal::pwm::SetDutyCycle;

/// On-duty numerator over [`DUTY_DENOMINATOR`]
pub const DUTY_NUMERATOR: u16 = 1;

/// On-duty denominator (1/256 of full scale)
pub const DUTY_DENOMINATOR: u16 = 256;

/// Backlight on a PWM channel
pub struct PwmBacklight<P> {
    pwm: P,
    on: bool,
}

impl<P: SetDutyCycle> PwmBacklight<P> {
    /// Wrap a PWM channel, starting with the backlight off
    pub fn new(mut pwm: P) -> Result<Self, P::Error> {
        pwm.set_duty_cycle_fully_off()?;
        Ok(Self { pwm, on: false })
    }

    /// Switch the backlight
    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on == self.on {
            return Ok(());
        }

        if on {
            self.pwm
                .set_duty_cycle_fraction(DUTY_NUMERATOR, DUTY_DENOMINATOR)?;
        } else {
            self.pwm.set_duty_cycle_fully_off()?;
        }
        self.on = on;
        Ok(())
    }

    /// Check if the backlight is lit
    pub fn is_on(&self) -> bool {
        self.on
    }
}
