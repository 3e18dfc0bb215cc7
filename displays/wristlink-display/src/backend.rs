//! Display backend trait
//!
//! Defines the interface for pixel displays.

use crate::font::FontSize;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// 24-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u32);

impl Color {
    /// Background
    pub const WHITE: Color = Color(0xff_ff_ff);
    /// Time, title and body text
    pub const BLACK: Color = Color(0x00_00_00);
    /// Battery text
    pub const RED: Color = Color(0xff_00_00);
    /// Free memory text
    pub const MAGENTA: Color = Color(0xff_00_ff);
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering to pixel displays.
/// Coordinates are in pixels from the top-left corner.
pub trait DisplayBackend {
    /// Fill the entire display with `color`
    fn clear(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at `(x, y)`
    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        font: FontSize,
        color: Color,
    ) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get pixel dimensions as (width, height)
    fn pixel_dimensions(&self) -> (u16, u16);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
