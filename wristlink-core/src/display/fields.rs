//! Renderable text regions

use heapless::{String, Vec};

use crate::config::{BODY_LINES, BODY_LINE_LEN, TITLE_LEN};

/// Maximum time text length (" 9:05")
pub const TIME_TEXT_LEN: usize = 8;

/// Maximum battery text length ("4.20v")
pub const BATTERY_TEXT_LEN: usize = 8;

/// Maximum memory text length (decimal byte count)
pub const MEMORY_TEXT_LEN: usize = 12;

/// One wrapped body row
pub type BodyLine = String<BODY_LINE_LEN>;

bitflags::bitflags! {
    /// Display regions, used as a dirty mask
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Regions: u8 {
        const TIME = 1 << 0;
        const TITLE = 1 << 1;
        const BODY = 1 << 2;
        const BATTERY = 1 << 3;
        const MEMORY = 1 << 4;
    }
}

/// Derived text for every region
///
/// Never authoritative: rebuilt from upstream state and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFields {
    /// Time of day, 12-hour, blank-padded hour
    pub time: String<TIME_TEXT_LEN>,
    /// Notification title
    pub title: String<TITLE_LEN>,
    /// Wrapped notification body, at most four rows
    pub body: Vec<BodyLine, BODY_LINES>,
    /// Battery status
    pub battery: String<BATTERY_TEXT_LEN>,
    /// Free heap bytes
    pub memory: String<MEMORY_TEXT_LEN>,
}

impl DisplayFields {
    /// Create empty fields
    pub const fn new() -> Self {
        Self {
            time: String::new(),
            title: String::new(),
            body: Vec::new(),
            battery: String::new(),
            memory: String::new(),
        }
    }

    /// Iterate body rows as string slices
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.body.iter().map(|line| line.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_mask() {
        let mut dirty = Regions::empty();
        assert!(dirty.is_empty());

        dirty |= Regions::TITLE | Regions::BODY;
        assert!(dirty.contains(Regions::TITLE));
        assert!(!dirty.contains(Regions::TIME));

        assert_eq!(Regions::all().bits(), 0b1_1111);
    }

    #[test]
    fn test_body_lines_iter() {
        let mut fields = DisplayFields::new();
        fields.body.push(BodyLine::try_from("one").unwrap()).unwrap();
        fields.body.push(BodyLine::try_from("two").unwrap()).unwrap();

        let mut lines = fields.body_lines();
        assert_eq!(lines.next(), Some("one"));
        assert_eq!(lines.next(), Some("two"));
        assert_eq!(lines.next(), None);
    }
}
