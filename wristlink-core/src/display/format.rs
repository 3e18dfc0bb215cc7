//! Text formatting for the fixed regions

use core::fmt::Write;

use heapless::String;

use super::fields::{BodyLine, BATTERY_TEXT_LEN, MEMORY_TEXT_LEN, TIME_TEXT_LEN};
use crate::power::BatteryReading;
use crate::time::DateTime;

/// Time of day as `"h:mm"` on a 12-hour dial, hour padded with a blank
pub fn time_text(now: &DateTime) -> String<TIME_TEXT_LEN> {
    let mut out = String::new();
    let _ = write!(out, "{:>2}:{:02}", now.hour12(), now.minute);
    out
}

/// Body of the disconnect notice: 24-hour `"H:MM."`
pub fn disconnected_body(now: &DateTime) -> BodyLine {
    let mut out = String::new();
    let _ = write!(out, "{}:{:02}.", now.hour, now.minute);
    out
}

/// Battery status text
///
/// Voltage is shown with two decimals, truncated to 10 mV.
pub fn battery_text(reading: BatteryReading) -> String<BATTERY_TEXT_LEN> {
    let mut out = String::new();
    match reading {
        BatteryReading::Full => {
            let _ = out.push_str("100%");
        }
        BatteryReading::Charging => {
            let _ = out.push_str("chg");
        }
        BatteryReading::Voltage(mv) => {
            let _ = write!(out, "{}.{:02}v", mv / 1000, (mv % 1000) / 10);
        }
        BatteryReading::Unknown => {}
    }
    out
}

/// Free memory as a decimal byte count; empty until first sampled
pub fn memory_text(free_bytes: Option<u32>) -> String<MEMORY_TEXT_LEN> {
    let mut out = String::new();
    if let Some(bytes) = free_bytes {
        let _ = write!(out, "{}", bytes);
    }
    out
}
