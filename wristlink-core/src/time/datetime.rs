//! Calendar date and time of day
//!
//! Integer-only, no time zones: the peer already sends local time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A local calendar date and time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    /// Full year (e.g. 2024)
    pub year: u16,
    /// Month, 1-12
    pub month: u8,
    /// Day of month, 1-31
    pub day: u8,
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
}

impl DateTime {
    /// Create a date-time from its fields (not validated)
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that every field is within its calendar range
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }

    /// Hour on a 12-hour dial (1-12)
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Return this time advanced by `secs` seconds
    ///
    /// Rolls over minutes, hours, days, months and years, including leap days.
    pub fn plus_seconds(&self, secs: u64) -> Self {
        let mut out = *self;

        let total = out.second as u64 + secs;
        out.second = (total % 60) as u8;
        let total = out.minute as u64 + total / 60;
        out.minute = (total % 60) as u8;
        let total = out.hour as u64 + total / 60;
        out.hour = (total % 24) as u8;
        let mut days = total / 24;

        while days > 0 {
            let remaining_in_month =
                days_in_month(out.year, out.month).saturating_sub(out.day) as u64;
            if days <= remaining_in_month {
                out.day += days as u8;
                break;
            }
            days -= remaining_in_month + 1;
            out.day = 1;
            if out.month == 12 {
                out.month = 1;
                out.year = out.year.saturating_add(1);
            } else {
                out.month += 1;
            }
        }

        out
    }
}

/// Check for a Gregorian leap year
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (0 for an invalid month)
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
