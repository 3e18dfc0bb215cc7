//! Peer time synchronization
//!
//! Pulls wall-clock time from the peer at most once per interval. Sync is
//! opportunistic: a failed exchange leaves the clock alone and is retried
//! on the next tick.

use super::datetime::DateTime;
use crate::traits::ClockReadError;

/// Rate-limited time synchronizer
#[derive(Debug, Clone)]
pub struct TimeSynchronizer {
    /// Minimum spacing between exchanges (ms)
    interval_ms: u64,
    /// Uptime of the last successful exchange
    last_sync_ms: Option<u64>,
}

impl TimeSynchronizer {
    /// Create a synchronizer that exchanges at most once per `interval_ms`
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_sync_ms: None,
        }
    }

    /// Uptime of the last successful exchange
    pub fn last_sync_ms(&self) -> Option<u64> {
        self.last_sync_ms
    }

    /// Check if an exchange is due
    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.last_sync_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.interval_ms,
        }
    }

    /// Exchange time with the peer if due
    ///
    /// `read` performs the exchange, `commit` writes the result to the local
    /// clock. Neither is called when not due. Returns the new last-sync
    /// timestamp on success.
    pub fn maybe_sync<R, C>(&mut self, now_ms: u64, read: R, commit: C) -> Option<u64>
    where
        R: FnOnce() -> Result<DateTime, ClockReadError>,
        C: FnOnce(DateTime),
    {
        if !self.is_due(now_ms) {
            return None;
        }

        match read() {
            Ok(time) => {
                commit(time);
                self.last_sync_ms = Some(now_ms);
                info!(
                    "clock synced to {}:{}:{}",
                    time.hour, time.minute, time.second
                );
                Some(now_ms)
            }
            Err(e) => {
                warn!("time sync deferred: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: u64 = 3_600_000;

    fn peer_time() -> DateTime {
        DateTime::new(2024, 6, 1, 9, 30, 0)
    }

    #[test]
    fn test_first_call_syncs() {
        let mut sync = TimeSynchronizer::new(HOUR_MS);
        let mut clock = DateTime::default();

        let result = sync.maybe_sync(500, || Ok(peer_time()), |t| clock = t);
        assert_eq!(result, Some(500));
        assert_eq!(clock, peer_time());
        assert_eq!(sync.last_sync_ms(), Some(500));
    }

    #[test]
    fn test_rate_gate_skips_read() {
        let mut sync = TimeSynchronizer::new(HOUR_MS);
        sync.maybe_sync(0, || Ok(peer_time()), |_| {});

        let mut reads = 0;
        let result = sync.maybe_sync(
            HOUR_MS,
            || {
                reads += 1;
                Ok(peer_time())
            },
            |_| {},
        );
        assert_eq!(result, None);
        assert_eq!(reads, 0);
    }

    #[test]
    fn test_syncs_again_after_interval() {
        let mut sync = TimeSynchronizer::new(HOUR_MS);
        sync.maybe_sync(0, || Ok(peer_time()), |_| {});

        let result = sync.maybe_sync(HOUR_MS + 1, || Ok(peer_time()), |_| {});
        assert_eq!(result, Some(HOUR_MS + 1));
    }

    #[test]
    fn test_failure_leaves_state_unchanged() {
        let mut sync = TimeSynchronizer::new(HOUR_MS);
        let mut committed = false;

        let result = sync.maybe_sync(
            10,
            || Err(ClockReadError::Unavailable),
            |_| committed = true,
        );
        assert_eq!(result, None);
        assert!(!committed);
        assert_eq!(sync.last_sync_ms(), None);
        assert!(sync.is_due(11));
    }
}
