//! Board-agnostic core logic for the wrist display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (radio transport, peripherals, render target)
//! - Link state machine and connection management
//! - Peer time synchronization
//! - Notification arbitration (dedup, scoring, current pick)
//! - Display field derivation with dirty tracking
//! - Battery and memory sampling
//! - The single-threaded control loop
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to every module below.
#[macro_use]
mod fmt;

pub mod config;
pub mod connection;
pub mod control;
pub mod display;
pub mod notification;
pub mod power;
pub mod state;
pub mod text;
pub mod time;
pub mod traits;
