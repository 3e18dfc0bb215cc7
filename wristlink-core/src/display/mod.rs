//! Display field derivation
//!
//! Turns time, battery, memory and the current notification into the five
//! renderable text regions, recomputing only what changed.

pub mod fields;
pub mod format;
pub mod state;
pub mod wrap;

pub use fields::{BodyLine, DisplayFields, Regions};
pub use state::{DisplayInputs, DisplayState, Shown, Subject};
pub use wrap::{body_lines, wrap_text_to_pixels};
