//! Peripheral drivers
//!
//! Concrete implementations of the wristlink-core peripheral traits on top
//! of `embedded-hal` pins and PWM channels:
//!
//! - User button and PWM backlight
//! - Haptic motor
//! - Battery voltage divider and charger status pins
//! - Accessory power rails
//! - Heap headroom gauge
//! - Software wall clock
//! - [`Board`](board::Board), the aggregate the control loop drives

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod backlight;
pub mod battery;
pub mod board;
pub mod button;
pub mod charge;
pub mod clock;
pub mod haptic;
pub mod memory;
pub mod power_rail;

pub use board::Board;
