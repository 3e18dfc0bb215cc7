//! Events that trigger link state transitions

/// Events observed while polling the radio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// Radio reports an active link to a peer
    LinkUp,
    /// Peer accepted pairing (or the link was already paired)
    PairingSucceeded,
    /// Peer rejected pairing
    PairingRejected,
    /// Radio reports no active link
    LinkLost,
    /// Radio read failed mid-operation
    TransportFault,
}

impl LinkEvent {
    /// Check if this event ends the usable session for the tick
    pub fn is_loss(&self) -> bool {
        matches!(
            self,
            LinkEvent::LinkLost | LinkEvent::TransportFault | LinkEvent::PairingRejected
        )
    }
}
