//! Wireless transport trait
//!
//! Pairing cryptography and attribute encoding stay below this line; the
//! core only sees connection handles, the peer's current time, and the
//! peer's active notification set.

use heapless::Vec;

use crate::notification::ActiveSet;
use crate::time::DateTime;

/// Maximum simultaneous links reported by a scan
pub const MAX_LINKS: usize = 2;

/// Opaque radio connection handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeerHandle(pub u16);

/// Radio or read fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Link dropped during the operation
    Disconnected,
    /// Peer did not answer in time
    Timeout,
    /// Malformed or unexpected response
    Protocol,
}

/// Peer refused to pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PairingError {
    /// Peer rejected the request
    Rejected,
    /// Pairing did not complete in time
    Timeout,
}

/// Time exchange failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockReadError {
    /// Peer does not expose the time service, or the read failed
    Unavailable,
    /// Peer sent a time outside calendar ranges
    Invalid,
}

impl From<TransportError> for ClockReadError {
    fn from(_: TransportError) -> Self {
        ClockReadError::Unavailable
    }
}

/// Trait for the wireless link to the phone
///
/// Every call is blocking with bounded latency (well under one tick).
pub trait WirelessTransport {
    /// List the currently active links
    fn scan_connections(&mut self) -> Result<Vec<PeerHandle, MAX_LINKS>, TransportError>;

    /// Check whether a link is already paired
    fn is_paired(&mut self, peer: PeerHandle) -> Result<bool, TransportError>;

    /// Pair with the peer
    ///
    /// Must be a no-op on an already-paired link.
    fn pair(&mut self, peer: PeerHandle) -> Result<(), PairingError>;

    /// Read the peer's current local time
    fn read_time_service(&mut self, peer: PeerHandle) -> Result<DateTime, ClockReadError>;

    /// Read the peer's active notification set into `out`
    ///
    /// `out` is cleared first. Records are appended in the peer's order,
    /// oldest first. When the peer lists more than `MAX_ACTIVE_NOTIFICATIONS`
    /// records, only the most recent ones are kept (see `push_recent`).
    fn read_active_notifications(
        &mut self,
        peer: PeerHandle,
        out: &mut ActiveSet,
    ) -> Result<(), TransportError>;
}
