//! Notification scoring

use super::model::Notification;
use crate::config::ArbiterConfig;

/// Score a notification
///
/// In order: VIP sender on the VIP app, then the per-app table, then the
/// importance flag, then zero.
pub fn score(config: &ArbiterConfig, n: &Notification) -> u16 {
    if n.app_id == config.vip.app_id && n.title == config.vip.sender {
        return config.vip.priority;
    }

    if let Some(priority) = config.table.lookup(&n.app_id) {
        return priority;
    }

    if n.important {
        return config.important_priority;
    }

    0
}
