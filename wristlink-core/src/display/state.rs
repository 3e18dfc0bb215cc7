//! Memoized display state
//!
//! Title and body are re-derived only when the identity of what they show
//! changes. Time, battery and memory text are compared against the cached
//! copy and only marked dirty when they differ.

use heapless::Vec;

use super::fields::{DisplayFields, Regions};
use super::format::{battery_text, disconnected_body, memory_text, time_text};
use super::wrap::body_lines;
use crate::notification::{Notification, NotificationId};
use crate::power::BatteryStatus;
use crate::text::bounded;
use crate::time::DateTime;
use crate::traits::TextMetrics;

/// Title shown before the first tick
pub const BOOT_TITLE: &str = "Starting";

/// Body shown before the first tick
pub const BOOT_BODY: &str = "Just started";

/// Title of the one-shot disconnect notice
pub const DISCONNECTED_TITLE: &str = "Disconnected";

/// What the title and body regions currently show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shown {
    /// Boot banner
    Boot,
    /// Nothing
    Blank,
    /// Disconnect notice
    Disconnected,
    /// A peer notification, by id
    Notification(NotificationId),
}

/// What the title and body regions should show this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject<'a> {
    /// Leave them as they are
    Keep,
    /// Clear them
    Blank,
    /// Show the disconnect notice
    Disconnected,
    /// Show this notification
    Notification(&'a Notification),
}

impl Subject<'_> {
    fn identity(&self) -> Option<Shown> {
        match self {
            Subject::Keep => None,
            Subject::Blank => Some(Shown::Blank),
            Subject::Disconnected => Some(Shown::Disconnected),
            Subject::Notification(n) => Some(Shown::Notification(n.id)),
        }
    }
}

/// Upstream values for one derivation pass
#[derive(Debug, Clone, Copy)]
pub struct DisplayInputs<'a> {
    /// Current wall-clock time
    pub now: DateTime,
    /// Title/body subject
    pub subject: Subject<'a>,
    /// Battery monitor result
    pub battery: BatteryStatus,
}

/// Display state with dirty tracking
#[derive(Debug, Clone)]
pub struct DisplayState {
    fields: DisplayFields,
    shown: Shown,
    dirty: Regions,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    /// Create the boot screen, fully dirty
    pub fn new() -> Self {
        let mut fields = DisplayFields::new();
        fields.title = bounded(BOOT_TITLE);
        let _ = fields.body.push(bounded(BOOT_BODY));

        Self {
            fields,
            shown: Shown::Boot,
            dirty: Regions::all(),
        }
    }

    /// Current derived fields
    pub fn fields(&self) -> &DisplayFields {
        &self.fields
    }

    /// Identity of the title/body content
    pub fn shown(&self) -> Shown {
        self.shown
    }

    /// Regions changed since the last successful render
    pub fn dirty(&self) -> Regions {
        self.dirty
    }

    /// Record a successful render
    pub fn mark_clean(&mut self) {
        self.dirty = Regions::empty();
    }

    /// Derive fields from upstream values
    ///
    /// Returns the regions that changed in this pass.
    pub fn update<M: TextMetrics>(&mut self, inputs: &DisplayInputs<'_>, metrics: &M) -> Regions {
        let mut changed = Regions::empty();

        let time = time_text(&inputs.now);
        if time != self.fields.time {
            self.fields.time = time;
            changed |= Regions::TIME;
        }

        let battery = battery_text(inputs.battery.reading);
        if battery != self.fields.battery {
            self.fields.battery = battery;
            changed |= Regions::BATTERY;
        }

        let memory = memory_text(inputs.battery.free_memory);
        if memory != self.fields.memory {
            self.fields.memory = memory;
            changed |= Regions::MEMORY;
        }

        if let Some(target) = inputs.subject.identity() {
            if target != self.shown {
                self.show(inputs.subject, &inputs.now, metrics);
                self.shown = target;
                changed |= Regions::TITLE | Regions::BODY;
            }
        }

        self.dirty |= changed;
        changed
    }

    fn show<M: TextMetrics>(&mut self, subject: Subject<'_>, now: &DateTime, metrics: &M) {
        match subject {
            Subject::Keep => {}
            Subject::Blank => {
                self.fields.title.clear();
                self.fields.body.clear();
            }
            Subject::Disconnected => {
                self.fields.title = bounded(DISCONNECTED_TITLE);
                self.fields.body = Vec::new();
                let _ = self.fields.body.push(disconnected_body(now));
            }
            Subject::Notification(n) => {
                self.fields.title = n.title.clone();
                self.fields.body = body_lines(&n.message, &n.app_id, metrics);
            }
        }
    }
}
