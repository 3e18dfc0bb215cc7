//! Link state machine
//!
//! Tracks the lifecycle of the single wireless peer connection.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::LinkEvent;
pub use machine::LinkState;
