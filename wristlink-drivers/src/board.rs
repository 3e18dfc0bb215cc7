//! Board peripherals
//!
//! Aggregates the individual drivers behind the single
//! [`PeripheralGateway`] the control loop drives.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;
use wristlink_core::time::DateTime;
use wristlink_core::traits::{
    ChargeState, MemoryProbe, Monotonic, PeripheralGateway, RealTimeClock, SensorError,
};

use crate::backlight::PwmBacklight;
use crate::battery::{AdcReader, BatteryDivider};
use crate::button::Button;
use crate::charge::ChargePins;
use crate::haptic::GpioHaptic;

/// Every peripheral the control loop touches
pub struct Board<BTN, BL, HAP, ADC, CHG, DONE, CLK, MEM> {
    button: Button<BTN>,
    backlight: PwmBacklight<BL>,
    haptic: GpioHaptic<HAP>,
    battery: BatteryDivider<ADC>,
    charge: ChargePins<CHG, DONE>,
    clock: CLK,
    memory: MEM,
}

impl<BTN, BL, HAP, ADC, CHG, DONE, CLK, MEM> Board<BTN, BL, HAP, ADC, CHG, DONE, CLK, MEM>
where
    BTN: InputPin,
    BL: SetDutyCycle,
    HAP: OutputPin,
    ADC: AdcReader,
    CHG: InputPin,
    DONE: InputPin,
    CLK: RealTimeClock + Monotonic,
    MEM: MemoryProbe,
{
    /// Assemble the board from its drivers
    pub fn new(
        button: Button<BTN>,
        backlight: PwmBacklight<BL>,
        haptic: GpioHaptic<HAP>,
        battery: BatteryDivider<ADC>,
        charge: ChargePins<CHG, DONE>,
        clock: CLK,
        memory: MEM,
    ) -> Self {
        Self {
            button,
            backlight,
            haptic,
            battery,
            charge,
            clock,
            memory,
        }
    }

    /// Backlight driver
    pub fn backlight(&self) -> &PwmBacklight<BL> {
        &self.backlight
    }

    /// Haptic driver
    pub fn haptic(&self) -> &GpioHaptic<HAP> {
        &self.haptic
    }
}

impl<BTN, BL, HAP, ADC, CHG, DONE, CLK, MEM> PeripheralGateway
    for Board<BTN, BL, HAP, ADC, CHG, DONE, CLK, MEM>
where
    BTN: InputPin,
    BL: SetDutyCycle,
    HAP: OutputPin,
    ADC: AdcReader,
    CHG: InputPin,
    DONE: InputPin,
    CLK: RealTimeClock + Monotonic,
    MEM: MemoryProbe,
{
    fn read_button(&mut self) -> Result<bool, SensorError> {
        self.button.is_pressed()
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), SensorError> {
        self.backlight.set(on).map_err(|_| {
            warn!("backlight pwm write failed");
            SensorError::PinFault
        })
    }

    fn read_battery_mv(&mut self) -> Result<u16, SensorError> {
        self.battery.read_mv()
    }

    fn read_charge_pins(&mut self) -> Result<ChargeState, SensorError> {
        self.charge.read()
    }

    fn set_haptic(&mut self, on: bool) {
        if self.haptic.set(on).is_err() {
            warn!("haptic pin write failed");
        }
    }

    fn get_clock(&mut self) -> DateTime {
        self.clock.now()
    }

    fn set_clock(&mut self, time: DateTime) {
        self.clock.set(time);
    }

    fn uptime_ms(&mut self) -> u64 {
        self.clock.now_ms()
    }

    fn compact_memory(&mut self) {
        self.memory.compact();
    }

    fn free_memory(&mut self) -> u32 {
        self.memory.free_bytes()
    }
}
