//! In-memory collaborators for driving the control loop on the host

#![allow(dead_code)]

use heapless::Vec;

use wristlink_core::config::DeviceConfig;
use wristlink_core::control::ControlLoop;
use wristlink_core::display::{DisplayFields, Regions};
use wristlink_core::notification::{push_recent, ActiveSet, Notification};
use wristlink_core::time::DateTime;
use wristlink_core::traits::radio::MAX_LINKS;
use wristlink_core::traits::{
    ChargeState, ClockReadError, PairingError, PeerHandle, PeripheralGateway, RenderTarget,
    SensorError, TextMetrics, TransportError, WirelessTransport,
};

pub const CALENDAR: &str = "com.flexibits.fantastical2.iphone";
pub const MAIL: &str = "com.fastmail.FastMail";

/// The phone can hold more notifications than the watch reads
pub const PHONE_BACKLOG: usize = 32;

/// Phone on the other end of the radio
#[derive(Default)]
pub struct FakePhone {
    pub linked: bool,
    pub paired: bool,
    pub reject_pairing: bool,
    pub read_fault: bool,
    pub time_fault: bool,
    pub pair_calls: u32,
    pub time_reads: u32,
    pub time: DateTime,
    pub notifications: Vec<Notification, PHONE_BACKLOG>,
}

impl FakePhone {
    pub fn linked() -> Self {
        Self {
            linked: true,
            time: DateTime::new(2024, 6, 1, 9, 30, 0),
            ..Default::default()
        }
    }

    pub fn post(&mut self, n: Notification) {
        self.notifications.push(n).unwrap();
    }

    pub fn dismiss(&mut self, id: u32) {
        for n in self.notifications.iter_mut() {
            if n.id == id {
                n.removed = true;
            }
        }
    }

    fn check_link(&self) -> Result<(), TransportError> {
        if self.linked {
            Ok(())
        } else {
            Err(TransportError::Disconnected)
        }
    }
}

impl WirelessTransport for FakePhone {
    fn scan_connections(&mut self) -> Result<Vec<PeerHandle, MAX_LINKS>, TransportError> {
        let mut links = Vec::new();
        if self.linked {
            links.push(PeerHandle(1)).unwrap();
        }
        Ok(links)
    }

    fn is_paired(&mut self, _peer: PeerHandle) -> Result<bool, TransportError> {
        self.check_link()?;
        Ok(self.paired)
    }

    fn pair(&mut self, _peer: PeerHandle) -> Result<(), PairingError> {
        self.pair_calls += 1;
        if self.reject_pairing {
            return Err(PairingError::Rejected);
        }
        self.paired = true;
        Ok(())
    }

    fn read_time_service(&mut self, _peer: PeerHandle) -> Result<DateTime, ClockReadError> {
        self.check_link()?;
        self.time_reads += 1;
        if self.time_fault {
            return Err(ClockReadError::Unavailable);
        }
        Ok(self.time)
    }

    fn read_active_notifications(
        &mut self,
        _peer: PeerHandle,
        out: &mut ActiveSet,
    ) -> Result<(), TransportError> {
        out.clear();
        self.check_link()?;
        if self.read_fault {
            return Err(TransportError::Timeout);
        }
        for n in self.notifications.iter() {
            push_recent(out, n.clone());
        }
        Ok(())
    }
}

/// Board peripherals
pub struct FakeBoard {
    pub button: bool,
    pub backlight: bool,
    pub backlight_writes: u32,
    pub backlight_fault: bool,
    pub haptic: bool,
    pub haptic_pulses: u32,
    pub charge: ChargeState,
    pub voltage_mv: u16,
    pub adc_reads: u32,
    pub clock: DateTime,
    pub clock_writes: u32,
    pub uptime_ms: u64,
    pub free: u32,
    pub compactions: u32,
}

impl Default for FakeBoard {
    fn default() -> Self {
        Self {
            button: false,
            backlight: false,
            backlight_writes: 0,
            backlight_fault: false,
            haptic: false,
            haptic_pulses: 0,
            charge: ChargeState::default(),
            voltage_mv: 3_700,
            adc_reads: 0,
            clock: DateTime::new(2024, 1, 1, 0, 0, 0),
            clock_writes: 0,
            uptime_ms: 0,
            free: 52_000,
            compactions: 0,
        }
    }
}

impl FakeBoard {
    /// Advance uptime and the wall clock together
    pub fn advance_ms(&mut self, ms: u64) {
        self.uptime_ms += ms;
        self.clock = self.clock.plus_seconds(ms / 1000);
    }
}

impl PeripheralGateway for FakeBoard {
    fn read_button(&mut self) -> Result<bool, SensorError> {
        Ok(self.button)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), SensorError> {
        self.backlight_writes += 1;
        if self.backlight_fault {
            return Err(SensorError::PinFault);
        }
        self.backlight = on;
        Ok(())
    }

    fn read_battery_mv(&mut self) -> Result<u16, SensorError> {
        self.adc_reads += 1;
        Ok(self.voltage_mv)
    }

    fn read_charge_pins(&mut self) -> Result<ChargeState, SensorError> {
        Ok(self.charge)
    }

    fn set_haptic(&mut self, on: bool) {
        if on && !self.haptic {
            self.haptic_pulses += 1;
        }
        self.haptic = on;
    }

    fn get_clock(&mut self) -> DateTime {
        self.clock
    }

    fn set_clock(&mut self, time: DateTime) {
        self.clock = time;
        self.clock_writes += 1;
    }

    fn uptime_ms(&mut self) -> u64 {
        self.uptime_ms
    }

    fn compact_memory(&mut self) {
        self.compactions += 1;
    }

    fn free_memory(&mut self) -> u32 {
        self.free
    }
}

/// Render target that keeps the last frame
#[derive(Default)]
pub struct Recorder {
    pub frames: u32,
    pub last: DisplayFields,
    pub last_dirty: Regions,
    pub fail: bool,
}

impl RenderTarget for Recorder {
    type Error = ();

    fn render(&mut self, fields: &DisplayFields, dirty: Regions) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.frames += 1;
        self.last = fields.clone();
        self.last_dirty = dirty;
        Ok(())
    }
}

/// 6 px per character on a 240 px wide body
pub struct Mono;

impl TextMetrics for Mono {
    fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * 6
    }

    fn line_width(&self) -> u32 {
        240
    }
}

pub type Device = ControlLoop<FakePhone, FakeBoard, Recorder, Mono>;

pub fn device(phone: FakePhone) -> Device {
    ControlLoop::new(
        DeviceConfig::default(),
        phone,
        FakeBoard::default(),
        Recorder::default(),
        Mono,
    )
}

/// One tick followed by the nominal sleep
pub fn step(device: &mut Device) {
    device.tick().unwrap();
    let interval = device.config().tick_interval_ms as u64;
    device.peripherals_mut().advance_ms(interval);
}

pub fn phone(device: &mut Device) -> &mut FakePhone {
    device.connection_mut().transport_mut()
}

pub fn shown_title(device: &Device) -> &str {
    device.target().last.title.as_str()
}

pub fn shown_body(device: &Device) -> std::vec::Vec<&str> {
    device.target().last.body_lines().collect()
}
