//! Notification priority rules
//!
//! Scoring is a pure function over this fixed table plus two constant
//! rules: the VIP sender override and the importance fallback.

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{APP_ID_LEN, MAX_PRIORITY_RULES, TITLE_LEN};
use crate::text::bounded;

/// Bundle identifier of the phone's messaging app
pub const MESSAGING_APP_ID: &str = "com.apple.MobileSMS";

/// Sender whose messages always win
pub const VIP_SENDER: &str = "Favourite Contact";

/// Priority of a message from the VIP sender
pub const VIP_PRIORITY: u16 = 1000;

/// Priority of an unlisted notification the peer flags as important
pub const IMPORTANT_PRIORITY: u16 = 1;

/// Built-in per-app priorities
const DEFAULT_RULES: &[(&str, u16)] = &[
    (MESSAGING_APP_ID, 10),
    ("com.flexibits.fantastical2.iphone", 2),
    ("com.fastmail.FastMail", 1),
    ("com.google.Gmail", 1),
];

/// A single app → priority entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriorityRule {
    /// Source app bundle identifier
    pub app_id: String<APP_ID_LEN>,
    /// Priority assigned to every notification from that app
    pub priority: u16,
}

/// Fixed per-app priority table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriorityTable {
    rules: Vec<PriorityRule, MAX_PRIORITY_RULES>,
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::from_rules(DEFAULT_RULES)
    }
}

impl PriorityTable {
    /// Create an empty table
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a table from `(app_id, priority)` pairs
    ///
    /// Entries beyond [`MAX_PRIORITY_RULES`] are ignored.
    pub fn from_rules(rules: &[(&str, u16)]) -> Self {
        let mut table = Self::empty();
        for (app_id, priority) in rules.iter().take(MAX_PRIORITY_RULES) {
            let _ = table.rules.push(PriorityRule {
                app_id: bounded(app_id),
                priority: *priority,
            });
        }
        table
    }

    /// Look up the priority for an app
    pub fn lookup(&self, app_id: &str) -> Option<u16> {
        self.rules
            .iter()
            .find(|r| r.app_id.as_str() == app_id)
            .map(|r| r.priority)
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Sender override on one app
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VipRule {
    /// App the override applies to
    pub app_id: String<APP_ID_LEN>,
    /// Sender name, matched against the notification title
    pub sender: String<TITLE_LEN>,
    /// Priority granted on a match
    pub priority: u16,
}

impl Default for VipRule {
    fn default() -> Self {
        Self {
            app_id: bounded(MESSAGING_APP_ID),
            sender: bounded(VIP_SENDER),
            priority: VIP_PRIORITY,
        }
    }
}

/// Scoring configuration for the notification arbiter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArbiterConfig {
    /// Per-app priorities
    pub table: PriorityTable,
    /// Sender override checked before the table
    pub vip: VipRule,
    /// Priority for unlisted notifications flagged important
    pub important_priority: u16,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            table: PriorityTable::default(),
            vip: VipRule::default(),
            important_priority: IMPORTANT_PRIORITY,
        }
    }
}
