//! Notification arbiter
//!
//! Picks, among the peer's active notifications, the single one worth
//! showing. Ties go to the most recently evaluated candidate.

use super::known::KnownSet;
use super::model::{find, CurrentPick, Notification, NotificationId};
use super::priority::score;
use crate::config::ArbiterConfig;

/// Effects of one arbiter tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArbiterOutcome {
    /// Haptic pulses to fire, one per non-silent candidate
    pub haptic_pulses: u8,
    /// Current pick changed identity this tick
    pub changed: bool,
    /// Link just dropped; show the one-shot disconnect notice
    pub disconnected_notice: bool,
}

/// Notification arbiter state
///
/// Owns the per-session dedup set and the current pick.
#[derive(Debug, Clone, Default)]
pub struct NotificationArbiter {
    /// Ids already evaluated this session
    known: KnownSet,
    /// Notification currently surfaced
    current: Option<CurrentPick>,
    /// Previous tick had a usable connection
    was_connected: bool,
}

impl NotificationArbiter {
    /// Create an arbiter with no session state
    pub const fn new() -> Self {
        Self {
            known: KnownSet::new(),
            current: None,
            was_connected: false,
        }
    }

    /// Current pick, if any
    pub fn current(&self) -> Option<CurrentPick> {
        self.current
    }

    /// Ids evaluated this session
    pub fn known(&self) -> &KnownSet {
        &self.known
    }

    /// Check if the previous tick was connected
    pub fn was_connected(&self) -> bool {
        self.was_connected
    }

    fn current_id(&self) -> Option<NotificationId> {
        self.current.map(|c| c.id)
    }

    /// Run one connected tick over the peer's active set
    pub fn tick_connected(
        &mut self,
        config: &ArbiterConfig,
        active: &[Notification],
    ) -> ArbiterOutcome {
        self.was_connected = true;
        let before = self.current_id();

        // Drop the pick once the peer dismisses it or stops reporting it
        if let Some(pick) = self.current {
            let live = find(active, pick.id).is_some_and(|n| !n.removed);
            if !live {
                debug!("current notification {} removed", pick.id);
                self.current = None;
            }
        }

        // Only live ids are kept, so the capacity bound never evicts one
        self.known.retain_active(active);

        let mut pulses: u8 = 0;

        for n in active {
            // A backlog is re-evaluated whenever nothing is picked
            if self.known.contains(n.id) && self.current.is_some() {
                continue;
            }

            if n.removed {
                self.known.insert(n.id);
                continue;
            }

            if !n.silent {
                pulses = pulses.saturating_add(1);
            }

            let priority = score(config, n);
            let replaces = match self.current {
                None => true,
                Some(current) => priority >= current.priority,
            };
            if replaces {
                self.current = Some(CurrentPick { id: n.id, priority });
            }

            self.known.insert(n.id);
        }

        let after = self.current_id();
        let changed = before != after;
        if changed {
            if let Some(pick) = self.current {
                info!(
                    "notification {} is current (priority {})",
                    pick.id, pick.priority
                );
            }
        }

        ArbiterOutcome {
            haptic_pulses: pulses,
            changed,
            disconnected_notice: false,
        }
    }

    /// Run one tick without a connection
    ///
    /// Ends the session: forgets every known id and the current pick. On
    /// the falling edge of the link, requests the disconnect notice once.
    pub fn tick_disconnected(&mut self) -> ArbiterOutcome {
        let notice = self.was_connected;
        if notice {
            info!("link lost, ending notification session");
        }
        self.was_connected = false;

        let changed = self.current.is_some();
        self.current = None;
        self.known.clear();

        ArbiterOutcome {
            haptic_pulses: 0,
            changed,
            disconnected_notice: notice,
        }
    }
}
