//! Software wall clock
//!
//! Keeps local time as an anchor plus elapsed monotonic time. Setting the
//! clock moves the anchor; reading adds whole seconds since then.

use wristlink_core::time::DateTime;
use wristlink_core::traits::{Monotonic, RealTimeClock};

/// Wall clock driven by a monotonic counter
pub struct SoftRtc<M> {
    mono: M,
    /// Time at the anchor
    base: DateTime,
    /// Monotonic reading at the anchor
    base_ms: u64,
}

impl<M: Monotonic> SoftRtc<M> {
    /// Start the clock at `time`
    pub fn new(mono: M, time: DateTime) -> Self {
        let base_ms = mono.now_ms();
        Self {
            mono,
            base: time,
            base_ms,
        }
    }
}

impl<M: Monotonic> RealTimeClock for SoftRtc<M> {
    fn now(&mut self) -> DateTime {
        let elapsed_s = self.mono.now_ms().saturating_sub(self.base_ms) / 1000;
        self.base.plus_seconds(elapsed_s)
    }

    fn set(&mut self, time: DateTime) {
        if !time.is_valid() {
            warn!("ignoring invalid time");
            return;
        }
        self.base = time;
        self.base_ms = self.mono.now_ms();
    }
}

impl<M: Monotonic> Monotonic for SoftRtc<M> {
    fn now_ms(&self) -> u64 {
        self.mono.now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockMono<'a> {
        ms: &'a Cell<u64>,
    }

    impl Monotonic for MockMono<'_> {
        fn now_ms(&self) -> u64 {
            self.ms.get()
        }
    }

    #[test]
    fn test_clock_advances_with_counter() {
        let ms = Cell::new(5_000);
        let mut rtc = SoftRtc::new(MockMono { ms: &ms }, DateTime::new(2024, 2, 28, 23, 59, 30));

        assert_eq!(rtc.now(), DateTime::new(2024, 2, 28, 23, 59, 30));

        // Partial seconds are not counted
        ms.set(5_999);
        assert_eq!(rtc.now().second, 30);

        ms.set(5_000 + 45_000);
        assert_eq!(rtc.now(), DateTime::new(2024, 2, 29, 0, 0, 15));
    }

    #[test]
    fn test_set_moves_anchor() {
        let ms = Cell::new(0);
        let mut rtc = SoftRtc::new(MockMono { ms: &ms }, DateTime::new(2024, 1, 1, 0, 0, 0));

        ms.set(10_000);
        rtc.set(DateTime::new(2024, 6, 1, 9, 30, 0));
        assert_eq!(rtc.now(), DateTime::new(2024, 6, 1, 9, 30, 0));

        ms.set(70_000);
        assert_eq!(rtc.now(), DateTime::new(2024, 6, 1, 9, 31, 0));
    }

    #[test]
    fn test_invalid_time_ignored() {
        let ms = Cell::new(0);
        let start = DateTime::new(2024, 1, 1, 12, 0, 0);
        let mut rtc = SoftRtc::new(MockMono { ms: &ms }, start);

        rtc.set(DateTime::new(2024, 13, 1, 0, 0, 0));
        assert_eq!(rtc.now(), start);
    }
}
