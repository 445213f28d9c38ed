//! Time source seam.
//!
//! Note timestamps and the greeting/advice buckets both read time through
//! [`Clock`], so tests can pin them.

use chrono::{Local, Timelike, Utc};

/// Source of wall-clock time.
pub trait Clock {
    /// Current Unix epoch milliseconds.
    fn now_ms(&self) -> i64;
    /// Current local hour in `0..=23`.
    fn local_hour(&self) -> u32;
}

/// System clock using local time zone for hours.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Clock frozen at a given instant and hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub now_ms: i64,
    pub hour: u32,
}

impl FixedClock {
    pub fn new(now_ms: i64, hour: u32) -> Self {
        Self { now_ms, hour }
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms
    }

    fn local_hour(&self) -> u32 {
        self.hour
    }
}
