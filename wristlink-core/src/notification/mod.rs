//! Notification arbitration
//!
//! Consumes the peer's active notification set each tick, deduplicates
//! already-seen ids, scores candidates, and holds the single current pick.

pub mod arbiter;
pub mod known;
pub mod model;
pub mod priority;

pub use arbiter::{ArbiterOutcome, NotificationArbiter};
pub use known::KnownSet;
pub use model::{find, push_recent, ActiveSet, CurrentPick, Notification, NotificationId};
pub use priority::score;
