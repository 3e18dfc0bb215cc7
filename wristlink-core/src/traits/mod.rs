//! Collaborator traits
//!
//! These traits define the interface between the control logic and the
//! platform services it treats as external: the radio transport, the
//! peripheral layer, and the render boundary.

pub mod display;
pub mod peripherals;
pub mod radio;

pub use display::{RenderTarget, TextMetrics};
pub use peripherals::{
    ChargeState, MemoryProbe, Monotonic, PeripheralGateway, RealTimeClock, SensorError,
};
pub use radio::{ClockReadError, PairingError, PeerHandle, TransportError, WirelessTransport};
