//! Configuration types
//!
//! Board-agnostic configuration structures. The priority table and timing
//! are fixed at build time; nothing here is edited at runtime.

pub mod priority;
pub mod types;

pub use priority::*;
pub use types::*;
