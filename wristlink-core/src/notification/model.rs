//! Notification records as reported by the peer

use heapless::{String, Vec};

use crate::config::{APP_ID_LEN, MAX_ACTIVE_NOTIFICATIONS, MESSAGE_LEN, TITLE_LEN};
use crate::text::bounded;

/// Peer-assigned notification id, unique while the notification is active
pub type NotificationId = u32;

/// The peer's active set for one tick, in the peer's order
pub type ActiveSet = Vec<Notification, MAX_ACTIVE_NOTIFICATIONS>;

/// One phone-delivered alert
///
/// Everything except `removed` is fixed once the peer reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Notification {
    /// Peer-assigned id
    pub id: NotificationId,
    /// Source app bundle identifier
    pub app_id: String<APP_ID_LEN>,
    /// Title (the sender, for messages)
    pub title: String<TITLE_LEN>,
    /// Message body
    pub message: String<MESSAGE_LEN>,
    /// Peer flags this notification as important
    pub important: bool,
    /// Peer asks for no sound or vibration
    pub silent: bool,
    /// Peer has dismissed this notification
    pub removed: bool,
}

impl Notification {
    /// Create a notification record; over-long text is truncated
    pub fn new(id: NotificationId, app_id: &str, title: &str, message: &str) -> Self {
        Self {
            id,
            app_id: bounded(app_id),
            title: bounded(title),
            message: bounded(message),
            important: false,
            silent: false,
            removed: false,
        }
    }

    /// Set the important flag
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// Set the silent flag
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Set the removed flag
    pub fn with_removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }
}

/// The arbiter's pick of which notification to surface
///
/// Holds only the id: the record itself lives in the peer's active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurrentPick {
    /// Id of the picked notification
    pub id: NotificationId,
    /// Priority it scored when picked
    pub priority: u16,
}

/// Look up a notification in the active set by id
pub fn find(active: &[Notification], id: NotificationId) -> Option<&Notification> {
    active.iter().find(|n| n.id == id)
}

/// Append a record from a peer listing, oldest first
///
/// A full set drops its oldest record, so a listing longer than
/// `MAX_ACTIVE_NOTIFICATIONS` leaves the most recent ones in `out`.
pub fn push_recent(out: &mut ActiveSet, n: Notification) {
    if out.is_full() {
        out.remove(0);
    }
    let _ = out.push(n);
}
