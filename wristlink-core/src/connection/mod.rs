//! Wireless connection management
//!
//! Owns the radio transport, tracks the single peer session, and keeps
//! transient radio faults from ever reaching the rest of the loop.

pub mod manager;

pub use manager::{Connection, ConnectionManager, LinkFault};
