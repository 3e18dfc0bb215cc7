//! Region renderer
//!
//! Draws the core's derived fields onto a [`DisplayBackend`]. Each dirty
//! region is blanked to the background and redrawn; clean regions are not
//! touched. Nothing is flushed unless every region drew.

use wristlink_core::display::{DisplayFields, Regions};
use wristlink_core::traits::RenderTarget;

use crate::backend::{Color, DisplayBackend, DisplayError};
use crate::font::{FontMetrics, FontSize};
use crate::layout::{Layout, Rect};

/// Text colour for the main regions
const INK: Color = Color::BLACK;

/// Renders display fields onto a backend
pub struct Panel<B> {
    backend: B,
    layout: Layout,
    /// Background painted at least once
    cleared: bool,
}

impl<B: DisplayBackend> Panel<B> {
    /// Take ownership of a ready backend
    pub fn new(backend: B) -> Result<Self, DisplayError> {
        if !backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }
        let (width, height) = backend.pixel_dimensions();
        let layout = Layout::new(width, height)?;
        Ok(Self {
            backend,
            layout,
            cleared: false,
        })
    }

    /// Metrics the core should wrap body text with
    pub fn metrics(&self) -> FontMetrics {
        self.layout.body_metrics()
    }

    /// Region geometry used for redraws
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get mutable access to the backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn blank(&mut self, rect: Rect) -> Result<(), DisplayError> {
        self.backend
            .fill_rect(rect.x, rect.y, rect.width, rect.height, Color::WHITE)
    }

    fn draw(&mut self, fields: &DisplayFields, dirty: Regions) -> Result<(), DisplayError> {
        if !self.cleared {
            self.backend.clear(Color::WHITE)?;
            self.cleared = true;
        }

        if dirty.contains(Regions::TIME) {
            let rect = self.layout.time();
            self.blank(rect)?;
            self.backend
                .draw_text(rect.x, rect.y, &fields.time, FontSize::Large, INK)?;
        }

        if dirty.contains(Regions::TITLE) {
            let rect = self.layout.title();
            self.blank(rect)?;
            self.backend
                .draw_text(rect.x, rect.y, &fields.title, FontSize::Medium, INK)?;
        }

        if dirty.contains(Regions::BODY) {
            let rect = self.layout.body();
            self.blank(rect)?;
            for (i, line) in fields.body_lines().enumerate() {
                let y = self.layout.body_line_y(i);
                self.backend
                    .draw_text(rect.x, y, line, FontSize::Small, INK)?;
            }
        }

        if dirty.contains(Regions::MEMORY) {
            let rect = self.layout.memory();
            self.blank(rect)?;
            self.backend
                .draw_text(rect.x, rect.y, &fields.memory, FontSize::Small, Color::MAGENTA)?;
        }

        if dirty.contains(Regions::BATTERY) {
            let rect = self.layout.battery();
            self.blank(rect)?;
            let x = self.layout.battery_x(&fields.battery);
            self.backend
                .draw_text(x, rect.y, &fields.battery, FontSize::Small, Color::RED)?;
        }

        self.backend.flush()
    }
}

impl<B: DisplayBackend> RenderTarget for Panel<B> {
    type Error = DisplayError;

    fn render(&mut self, fields: &DisplayFields, dirty: Regions) -> Result<(), DisplayError> {
        self.draw(fields, dirty)
    }
}
