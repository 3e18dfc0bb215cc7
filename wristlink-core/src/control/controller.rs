//! Control loop coordinating connection, sync, arbitration and display
//!
//! The loop is the only execution context: it owns every collaborator and
//! the device state, so nothing needs locking.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

use super::device::DeviceState;
use crate::config::DeviceConfig;
use crate::connection::ConnectionManager;
use crate::display::{DisplayInputs, Regions, Subject};
use crate::notification::{find, ArbiterOutcome};
use crate::state::LinkState;
use crate::traits::{PeripheralGateway, RenderTarget, SensorError, TextMetrics, WirelessTransport};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Link state after polling
    pub link: LinkState,
    /// A paired connection was available
    pub connected: bool,
    /// Wireless work was skipped after a transport fault
    pub wireless_skipped: bool,
    /// Peer time was committed to the clock
    pub time_synced: bool,
    /// Haptic pulses fired
    pub haptic_pulses: u8,
    /// Disconnect notice was raised
    pub disconnected_notice: bool,
    /// Regions handed to the render target
    pub rendered: Regions,
}

/// The device control loop
pub struct ControlLoop<T, P, R, M> {
    config: DeviceConfig,
    connection: ConnectionManager<T>,
    peripherals: P,
    target: R,
    metrics: M,
    state: DeviceState,
}

impl<T, P, R, M> ControlLoop<T, P, R, M>
where
    T: WirelessTransport,
    P: PeripheralGateway,
    R: RenderTarget,
    M: TextMetrics,
{
    /// Create a control loop in its power-on state
    pub fn new(config: DeviceConfig, transport: T, peripherals: P, target: R, metrics: M) -> Self {
        let state = DeviceState::new(&config);
        Self {
            config,
            connection: ConnectionManager::new(transport),
            peripherals,
            target,
            metrics,
            state,
        }
    }

    /// Device configuration
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Device state
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Connection manager
    pub fn connection(&self) -> &ConnectionManager<T> {
        &self.connection
    }

    /// Mutable connection manager
    pub fn connection_mut(&mut self) -> &mut ConnectionManager<T> {
        &mut self.connection
    }

    /// Peripheral gateway
    pub fn peripherals(&self) -> &P {
        &self.peripherals
    }

    /// Mutable peripheral gateway
    pub fn peripherals_mut(&mut self) -> &mut P {
        &mut self.peripherals
    }

    /// Render target
    pub fn target(&self) -> &R {
        &self.target
    }

    /// Mutable access to the render target
    pub fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    /// Run forever, one tick per interval
    ///
    /// Returns only if a battery or pin read fails.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> Result<Infallible, SensorError> {
        info!(
            "control loop started, {} ms tick",
            self.config.tick_interval_ms
        );
        loop {
            if let Err(e) = self.tick() {
                error!("sensor fault, stopping: {}", e);
                return Err(e);
            }
            delay.delay_ms(self.config.tick_interval_ms);
        }
    }

    /// Run one tick
    pub fn tick(&mut self) -> Result<TickReport, SensorError> {
        let now_ms = self.peripherals.uptime_ms();
        let mut report = TickReport::default();

        // Button held means backlight on
        let held = self.peripherals.read_button()?;
        if held != self.state.backlight_on {
            // A failed write is retried next tick
            match self.peripherals.set_backlight(held) {
                Ok(()) => self.state.backlight_on = held,
                Err(e) => warn!("backlight write failed: {:?}", e),
            }
        }

        let outcome = self.run_wireless(now_ms, &mut report);
        report.link = self.connection.state();

        if let Some(outcome) = outcome {
            for _ in 0..outcome.haptic_pulses {
                self.peripherals.pulse_haptic();
            }
            if outcome.haptic_pulses > 0 {
                debug!("haptic x{}", outcome.haptic_pulses);
            }
            report.haptic_pulses = outcome.haptic_pulses;
            report.disconnected_notice = outcome.disconnected_notice;
        }

        let battery = self.state.battery.update(&mut self.peripherals, now_ms)?;
        let now = self.peripherals.get_clock();

        let subject = match outcome {
            None => Subject::Keep,
            Some(o) if o.disconnected_notice => Subject::Disconnected,
            Some(_) => match self.state.arbiter.current() {
                Some(pick) => {
                    find(&self.state.active, pick.id).map_or(Subject::Keep, Subject::Notification)
                }
                None => Subject::Blank,
            },
        };

        let inputs = DisplayInputs {
            now,
            subject,
            battery,
        };
        self.state.display.update(&inputs, &self.metrics);

        let dirty = self.state.display.dirty();
        if !dirty.is_empty() {
            match self.target.render(self.state.display.fields(), dirty) {
                Ok(()) => {
                    self.state.display.mark_clean();
                    report.rendered = dirty;
                }
                Err(_) => warn!("render failed, regions {} stay dirty", dirty.bits()),
            }
        }

        Ok(report)
    }

    /// Connection poll, time sync and arbitration
    ///
    /// Returns `None` when a transport fault skipped this tick's wireless work.
    fn run_wireless(&mut self, now_ms: u64, report: &mut TickReport) -> Option<ArbiterOutcome> {
        let Some(connection) = self.connection.poll() else {
            self.state.active.clear();
            return Some(self.state.arbiter.tick_disconnected());
        };
        report.connected = true;

        let link = &mut self.connection;
        let peripherals = &mut self.peripherals;
        report.time_synced = self
            .state
            .sync
            .maybe_sync(
                now_ms,
                || link.read_time(connection),
                |time| peripherals.set_clock(time),
            )
            .is_some();

        if self
            .connection
            .read_active(connection, &mut self.state.active)
            .is_err()
        {
            report.wireless_skipped = true;
            return None;
        }

        Some(
            self.state
                .arbiter
                .tick_connected(&self.config.arbiter, &self.state.active),
        )
    }
}
