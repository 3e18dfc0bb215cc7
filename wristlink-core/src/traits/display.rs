//! Render boundary traits

use crate::display::{DisplayFields, Regions};

/// Trait for font measurement
///
/// Used to wrap body text to the display width in pixels.
pub trait TextMetrics {
    /// Rendered width of `text` in pixels
    fn text_width(&self, text: &str) -> u32;

    /// Usable width of the body region in pixels
    fn line_width(&self) -> u32;
}

/// Trait for the display output
///
/// The control loop hands over the derived fields together with the set of
/// regions that changed since the last successful render.
pub trait RenderTarget {
    /// Error type for render failures
    type Error;

    /// Draw the dirty regions of `fields`
    fn render(&mut self, fields: &DisplayFields, dirty: Regions) -> Result<(), Self::Error>;
}
