//! Fixed-width fonts

use wristlink_core::traits::TextMetrics;

/// Font used for a text region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// Clock digits
    Large,
    /// Notification title
    Medium,
    /// Body and footer
    Small,
}

impl FontSize {
    /// Glyph cell for this size
    pub const fn font(self) -> MonoFont {
        match self {
            FontSize::Large => MonoFont::new(32, 64),
            FontSize::Medium => MonoFont::new(16, 32),
            FontSize::Small => MonoFont::new(6, 14),
        }
    }
}

/// Monospaced glyph cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonoFont {
    /// Advance per character in pixels
    pub char_width: u16,
    /// Line height in pixels
    pub line_height: u16,
}

impl MonoFont {
    /// Create a glyph cell
    pub const fn new(char_width: u16, line_height: u16) -> Self {
        Self {
            char_width,
            line_height,
        }
    }

    /// Rendered width of `text` in pixels
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.char_width as u32
    }
}

/// Font measured against a fixed line width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    font: MonoFont,
    line_width: u32,
}

impl FontMetrics {
    /// Measure with `font` against `line_width` pixels
    pub const fn new(font: MonoFont, line_width: u32) -> Self {
        Self { font, line_width }
    }
}

impl TextMetrics for FontMetrics {
    fn text_width(&self, text: &str) -> u32 {
        self.font.text_width(text)
    }

    fn line_width(&self) -> u32 {
        self.line_width
    }
}
