//! Per-session set of already-evaluated notification ids

use heapless::Deque;

use super::model::{find, Notification, NotificationId};
use crate::config::MAX_KNOWN_NOTIFICATIONS;

/// Ids evaluated during the current connection session
///
/// Bounded FIFO: inserting into a full set evicts the oldest id. Pruning to
/// the active set every tick keeps live ids out of reach of eviction.
#[derive(Debug, Clone, Default)]
pub struct KnownSet {
    ids: Deque<NotificationId, MAX_KNOWN_NOTIFICATIONS>,
}

impl KnownSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self { ids: Deque::new() }
    }

    /// Check if an id has been evaluated
    pub fn contains(&self, id: NotificationId) -> bool {
        self.ids.iter().any(|&known| known == id)
    }

    /// Record an id; no-op if already present
    pub fn insert(&mut self, id: NotificationId) {
        if self.contains(id) {
            return;
        }
        if self.ids.is_full() {
            let _ = self.ids.pop_front();
        }
        let _ = self.ids.push_back(id);
    }

    /// Forget ids the peer no longer reports
    pub fn retain_active(&mut self, active: &[Notification]) {
        let mut kept = Deque::new();
        while let Some(id) = self.ids.pop_front() {
            if find(active, id).is_some() {
                let _ = kept.push_back(id);
            }
        }
        self.ids = kept;
    }

    /// Forget every id
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of ids held
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if no ids are held
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
