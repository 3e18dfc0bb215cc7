//! Battery voltage divider
//!
//! The cell is measured through a resistor divider into an ADC channel.
//! Conversions are left-aligned to 16 bits whatever the converter's native
//! resolution, so full scale is always 65536.

use wristlink_core::traits::SensorError;

/// Full-scale count of a left-aligned conversion
pub const ADC_FULL_SCALE: u32 = 65_536;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read a left-aligned 16-bit conversion
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Battery sense divider
pub struct BatteryDivider<ADC> {
    adc: ADC,
    /// ADC reference voltage in mV
    vref_mv: u16,
    /// Divider ratio (cell voltage / pin voltage)
    ratio: u8,
}

impl<ADC> BatteryDivider<ADC> {
    /// Create a divider
    ///
    /// # Arguments
    /// - `adc`: ADC channel on the divider tap
    /// - `vref_mv`: Reference voltage in millivolts (typically 3300)
    /// - `ratio`: Divider ratio (4 for the usual 3:1 resistor pair)
    pub fn new(adc: ADC, vref_mv: u16, ratio: u8) -> Self {
        Self {
            adc,
            vref_mv,
            ratio,
        }
    }

    /// Convert a raw conversion to cell millivolts
    pub fn raw_to_mv(&self, raw: u16) -> u16 {
        let mv = raw as u32 * self.vref_mv as u32 * self.ratio as u32 / ADC_FULL_SCALE;
        mv.min(u16::MAX as u32) as u16
    }
}

impl<ADC: AdcReader> BatteryDivider<ADC> {
    /// Sample the cell voltage in millivolts
    pub fn read_mv(&mut self) -> Result<u16, SensorError> {
        let raw = self.adc.read().map_err(|_| SensorError::AdcFault)?;
        let mv = self.raw_to_mv(raw);
        trace!("battery adc {} -> {} mV", raw, mv);
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAdc {
        value: Option<u16>,
    }

    impl AdcReader for MockAdc {
        fn read(&mut self) -> Result<u16, ()> {
            self.value.ok_or(())
        }
    }

    #[test]
    fn test_raw_to_mv() {
        let divider = BatteryDivider::new(MockAdc { value: None }, 3300, 4);

        assert_eq!(divider.raw_to_mv(0), 0);
        // 18_400 / 65536 * 3.3 V * 4 = 3.706 V
        assert_eq!(divider.raw_to_mv(18_400), 3_706);
        // Full scale
        assert_eq!(divider.raw_to_mv(u16::MAX), 13_199);
    }

    #[test]
    fn test_read_mv() {
        let mut divider = BatteryDivider::new(MockAdc { value: Some(32_768) }, 3300, 4);
        assert_eq!(divider.read_mv(), Ok(6_600));
    }

    #[test]
    fn test_adc_failure_is_adc_fault() {
        let mut divider = BatteryDivider::new(MockAdc { value: None }, 3300, 4);
        assert_eq!(divider.read_mv(), Err(SensorError::AdcFault));
    }
}
