//! Rate-limited battery monitor
//!
//! Analog sampling costs power and churns memory, so the voltage is read at
//! most once per sample interval and only while running on battery. Free
//! memory is sampled on the same cadence, right after a compaction pass.

use crate::traits::{ChargeState, PeripheralGateway, SensorError};

/// What the battery region should say
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryReading {
    /// Charger reports complete
    Full,
    /// On external power, still charging
    Charging,
    /// On battery; last sampled voltage in millivolts
    Voltage(u16),
    /// Nothing sampled yet
    #[default]
    Unknown,
}

/// Raw battery sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatterySample {
    /// Battery voltage in millivolts
    pub voltage_mv: u16,
    /// Charger pin state when sampled
    pub charge: ChargeState,
}

/// Result of one monitor update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryStatus {
    /// Battery region state
    pub reading: BatteryReading,
    /// Free heap bytes from the latest sample
    pub free_memory: Option<u32>,
    /// A fresh sample was taken this update
    pub sampled: bool,
}

/// Battery monitor
#[derive(Debug, Clone)]
pub struct BatteryMonitor {
    /// Minimum spacing between samples (ms)
    interval_ms: u64,
    /// Uptime of the last sample
    last_sample_ms: Option<u64>,
    /// Last sample taken
    last_sample: Option<BatterySample>,
    /// Free heap at the last sample
    last_free_memory: Option<u32>,
}

impl BatteryMonitor {
    /// Create a monitor sampling at most once per `interval_ms`
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_sample_ms: None,
            last_sample: None,
            last_free_memory: None,
        }
    }

    /// Check if a fresh sample is due
    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.last_sample_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.interval_ms,
        }
    }

    /// Last sample taken, if any
    pub fn last_sample(&self) -> Option<BatterySample> {
        self.last_sample
    }

    /// Evaluate the charger state and sample if on battery and due
    ///
    /// In order: charge complete, then charging, then the voltage (fresh if
    /// due, otherwise the cached reading).
    pub fn update<P: PeripheralGateway>(
        &mut self,
        peripherals: &mut P,
        now_ms: u64,
    ) -> Result<BatteryStatus, SensorError> {
        let charge = peripherals.read_charge_pins()?;

        if charge.fully_charged {
            return Ok(self.status(BatteryReading::Full, false));
        }

        if charge.charging {
            return Ok(self.status(BatteryReading::Charging, false));
        }

        let mut sampled = false;
        if self.is_due(now_ms) {
            let voltage_mv = peripherals.read_battery_mv()?;
            peripherals.compact_memory();
            let free = peripherals.free_memory();

            self.last_sample = Some(BatterySample { voltage_mv, charge });
            self.last_free_memory = Some(free);
            self.last_sample_ms = Some(now_ms);
            sampled = true;
            debug!("battery sample: {} mV, {} bytes free", voltage_mv, free);
        }

        let reading = match self.last_sample {
            Some(sample) => BatteryReading::Voltage(sample.voltage_mv),
            None => BatteryReading::Unknown,
        };
        Ok(self.status(reading, sampled))
    }

    fn status(&self, reading: BatteryReading, sampled: bool) -> BatteryStatus {
        BatteryStatus {
            reading,
            free_memory: self.last_free_memory,
            sampled,
        }
    }
}
