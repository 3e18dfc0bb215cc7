//! Link state definition
//!
//! `Disconnected -> Connecting -> Paired -> Disconnected` on loss.

use super::events::LinkEvent;

/// Connection lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// No usable peer link
    #[default]
    Disconnected,
    /// Link is up, pairing not yet confirmed
    Connecting,
    /// Link is up and paired; wireless work may run
    Paired,
}

impl LinkState {
    /// Check if wireless work may run in this state
    pub fn is_usable(&self) -> bool {
        matches!(self, LinkState::Paired)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: LinkEvent) -> Self {
        use LinkEvent::*;
        use LinkState::*;

        match (self, event) {
            // Any loss drops the session
            (_, LinkLost) | (_, TransportFault) | (_, PairingRejected) => Disconnected,

            (Disconnected, LinkUp) => Connecting,
            (Connecting, PairingSucceeded) => Paired,

            // A link that is already up stays where it is
            (Connecting, LinkUp) => Connecting,
            (Paired, LinkUp) | (Paired, PairingSucceeded) => Paired,

            // Pairing without a link is meaningless
            (Disconnected, PairingSucceeded) => Disconnected,
        }
    }
}
