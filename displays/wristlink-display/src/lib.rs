//! Display backend trait and panel renderer for Wristlink
//!
//! This crate provides:
//! - `DisplayBackend` trait for pixel displays (TFT, e-paper, etc.)
//! - Fixed-width font metrics used both to wrap body text and to place it
//! - The screen layout: time, title, body, and a memory/battery footer
//! - `Panel`, which redraws only the regions the core marks dirty
//!
//! # Architecture
//!
//! The core derives text for each region and hands it over through
//! `RenderTarget`. `Panel` implements that trait on top of any
//! `DisplayBackend`, so the control loop never sees pixels.

#![no_std]

pub mod backend;
pub mod font;
pub mod layout;
pub mod panel;

// Re-export key types
pub use backend::{Color, DisplayBackend, DisplayError};
pub use font::{FontMetrics, FontSize, MonoFont};
pub use layout::{Layout, Rect};
pub use panel::Panel;
