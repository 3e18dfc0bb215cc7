//! Screen layout
//!
//! Fixed regions stacked from the top: clock, title, four body rows. The
//! footer sits on the bottom edge with free memory on the left and the
//! battery right-aligned.

use wristlink_core::config::BODY_LINES;

use crate::backend::DisplayError;
use crate::font::{FontMetrics, FontSize};

/// Pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// First row below the rectangle
    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }
}

/// Region placement for one display size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: u16,
    time: Rect,
    title: Rect,
    body: Rect,
    memory: Rect,
    battery: Rect,
}

impl Layout {
    /// Lay out a `width` x `height` display
    ///
    /// Fails if the stacked regions would run into the footer.
    pub fn new(width: u16, height: u16) -> Result<Self, DisplayError> {
        let large = FontSize::Large.font();
        let medium = FontSize::Medium.font();
        let small = FontSize::Small.font();

        let time = Rect {
            x: 0,
            y: 0,
            width,
            height: large.line_height,
        };
        let title = Rect {
            x: 0,
            y: time.bottom(),
            width,
            height: medium.line_height,
        };
        let body = Rect {
            x: 0,
            y: title.bottom(),
            width,
            height: small.line_height * BODY_LINES as u16,
        };

        let footer_y = height
            .checked_sub(small.line_height)
            .ok_or(DisplayError::InvalidCoordinates)?;
        if body.bottom() > footer_y {
            return Err(DisplayError::InvalidCoordinates);
        }

        let half = width / 2;
        let memory = Rect {
            x: 0,
            y: footer_y,
            width: half,
            height: small.line_height,
        };
        let battery = Rect {
            x: half,
            y: footer_y,
            width: width - half,
            height: small.line_height,
        };

        Ok(Self {
            width,
            time,
            title,
            body,
            memory,
            battery,
        })
    }

    /// Clock row
    pub fn time(&self) -> Rect {
        self.time
    }

    /// Notification title row
    pub fn title(&self) -> Rect {
        self.title
    }

    /// Wrapped body rows, app id included
    pub fn body(&self) -> Rect {
        self.body
    }

    /// Free memory, left side of the footer
    pub fn memory(&self) -> Rect {
        self.memory
    }

    /// Battery text, right-aligned in the footer
    pub fn battery(&self) -> Rect {
        self.battery
    }

    /// Top edge of body row `index`
    pub fn body_line_y(&self, index: usize) -> u16 {
        self.body.y + FontSize::Small.font().line_height * index as u16
    }

    /// Left edge that right-aligns `text` in the footer
    pub fn battery_x(&self, text: &str) -> u16 {
        let width = FontSize::Small.font().text_width(text);
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        self.width.saturating_sub(width).max(self.battery.x)
    }

    /// Metrics for wrapping body text to the full width
    pub fn body_metrics(&self) -> FontMetrics {
        FontMetrics::new(FontSize::Small.font(), self.width as u32)
    }
}
