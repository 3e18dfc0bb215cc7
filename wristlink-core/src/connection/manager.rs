//! Connection manager

use crate::notification::ActiveSet;
use crate::state::{LinkEvent, LinkState};
use crate::time::DateTime;
use crate::traits::{ClockReadError, PairingError, PeerHandle, TransportError, WirelessTransport};

/// The current peer session
///
/// At most one is live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Connection {
    /// Radio handle for the link
    pub handle: PeerHandle,
    /// Link has been paired
    pub paired: bool,
}

/// Why a link could not be used this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkFault {
    /// Radio read failed
    Transport(TransportError),
    /// Peer refused to pair
    Pairing(PairingError),
}

impl LinkFault {
    fn event(&self) -> LinkEvent {
        match self {
            LinkFault::Transport(_) => LinkEvent::TransportFault,
            LinkFault::Pairing(_) => LinkEvent::PairingRejected,
        }
    }
}

/// Connection manager
pub struct ConnectionManager<T> {
    transport: T,
    state: LinkState,
    connection: Option<Connection>,
}

impl<T: WirelessTransport> ConnectionManager<T> {
    /// Create a manager over a radio transport
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: LinkState::Disconnected,
            connection: None,
        }
    }

    /// Current link state
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Current connection, if usable
    pub fn connection(&self) -> Option<Connection> {
        self.connection
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    fn apply(&mut self, event: LinkEvent) {
        let next = self.state.transition(event);
        if next != self.state {
            info!("link {} -> {} ({})", self.state, next, event);
        }
        self.state = next;
        if !next.is_usable() {
            self.connection = None;
        }
    }

    /// Scan the radio and return a usable, paired connection
    ///
    /// Scan faults and pairing rejections are logged and reported as `None`
    /// for this tick; they never propagate.
    pub fn poll(&mut self) -> Option<Connection> {
        let links = match self.transport.scan_connections() {
            Ok(links) => links,
            Err(e) => {
                warn!("radio scan failed: {}", e);
                self.apply(LinkEvent::TransportFault);
                return None;
            }
        };

        let Some(&handle) = links.first() else {
            self.apply(LinkEvent::LinkLost);
            return None;
        };

        if links.len() > 1 {
            debug!("{} links up, using the first", links.len());
        }

        // A different handle is a new session
        if let Some(previous) = self.connection {
            if previous.handle != handle {
                self.apply(LinkEvent::LinkLost);
            }
        }
        self.apply(LinkEvent::LinkUp);

        let mut connection = match self.connection {
            Some(existing) => existing,
            None => Connection {
                handle,
                paired: false,
            },
        };

        match self.ensure_paired(&mut connection) {
            Ok(()) => {
                self.apply(LinkEvent::PairingSucceeded);
                self.connection = Some(connection);
                Some(connection)
            }
            Err(fault) => {
                warn!("link unusable this tick: {}", fault);
                self.apply(fault.event());
                None
            }
        }
    }

    /// Make sure a connection is paired
    ///
    /// Idempotent: an already-paired connection is left untouched and the
    /// peer is not asked again.
    pub fn ensure_paired(&mut self, connection: &mut Connection) -> Result<(), LinkFault> {
        if connection.paired {
            return Ok(());
        }

        let paired = self
            .transport
            .is_paired(connection.handle)
            .map_err(LinkFault::Transport)?;

        if !paired {
            self.transport
                .pair(connection.handle)
                .map_err(LinkFault::Pairing)?;
            info!("paired with peer {}", connection.handle.0);
        }

        connection.paired = true;
        Ok(())
    }

    /// Read the peer's current time
    pub fn read_time(&mut self, connection: Connection) -> Result<DateTime, ClockReadError> {
        let time = self.transport.read_time_service(connection.handle)?;
        if !time.is_valid() {
            return Err(ClockReadError::Invalid);
        }
        Ok(time)
    }

    /// Read the peer's active notification set
    ///
    /// A fault drops the session state so the next poll re-establishes it.
    pub fn read_active(
        &mut self,
        connection: Connection,
        out: &mut ActiveSet,
    ) -> Result<(), TransportError> {
        let result = self
            .transport
            .read_active_notifications(connection.handle, out);
        if let Err(e) = result {
            warn!("notification read failed: {}", e);
            out.clear();
            self.apply(LinkEvent::TransportFault);
        }
        result
    }
}
