// Rate conversions and the armed tick deadline used by the playback engine

use std::time::{Duration, Instant};

/// Display interval of one word at the given rate, with microsecond
/// precision so fast test rates (e.g. 6000 WPM = 10ms) stay exact.
pub fn wpm_to_interval(wpm: u32) -> Duration {
    Duration::from_micros(60_000_000 / u64::from(wpm.max(1)))
}

/// Rounded per-word delay in milliseconds, for display.
pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / f64::from(wpm.max(1))).round() as u64
}

/// A single armed advance timer.
///
/// The controller owns at most one; dropping it is how a pending tick is
/// cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    due: Instant,
}

impl Ticker {
    pub fn arm(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            due: now + interval,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }

    /// Moves the deadline one interval forward from the previous deadline,
    /// so a late event loop does not drift the cadence.
    pub fn reschedule(&mut self) {
        self.due += self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_to_interval_250() {
        assert_eq!(wpm_to_interval(250), Duration::from_millis(240));
    }

    #[test]
    fn test_wpm_to_interval_600() {
        assert_eq!(wpm_to_interval(600), Duration::from_millis(100));
    }

    #[test]
    fn test_wpm_to_interval_6000() {
        assert_eq!(wpm_to_interval(6000), Duration::from_millis(10));
    }

    #[test]
    fn test_wpm_to_interval_keeps_sub_millisecond_precision() {
        // 60,000 / 350 = 171.428... ms
        assert_eq!(wpm_to_interval(350), Duration::from_micros(171_428));
    }

    #[test]
    fn test_wpm_to_interval_zero_is_floored() {
        assert_eq!(wpm_to_interval(0), Duration::from_secs(60));
    }

    #[test]
    fn test_wpm_to_milliseconds_rounds() {
        // 60,000 / 165 = 363.63... → 364, not truncated to 363
        assert_eq!(wpm_to_milliseconds(165), 364);
        assert_eq!(wpm_to_milliseconds(300), 200);
    }

    #[test]
    fn test_ticker_lifecycle() {
        let start = Instant::now();
        let mut ticker = Ticker::arm(Duration::from_millis(100), start);
        assert!(!ticker.is_due(start));
        assert_eq!(ticker.remaining(start), Duration::from_millis(100));
        assert!(ticker.is_due(start + Duration::from_millis(100)));

        ticker.reschedule();
        // Rescheduled from the old deadline, not from the late observation.
        assert_eq!(ticker.remaining(start + Duration::from_millis(150)), Duration::from_millis(50));
        assert_eq!(ticker.remaining(start + Duration::from_millis(250)), Duration::ZERO);
    }
}
