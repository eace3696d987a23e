//! Time capability used for id seeding and overdue checks.
//!
//! # Responsibility
//! - Abstract wall-clock access behind a small trait so every time-sensitive
//!   behavior stays deterministic under test.
//!
//! # Invariants
//! - `now_ms` is epoch milliseconds, timezone-independent.
//! - `today` is the local calendar date; overdue comparisons operate on
//!   calendar dates only, never on raw timestamps.

use chrono::{Local, NaiveDate, Utc};

/// Wall-clock capability.
pub trait Clock {
    /// Current instant as Unix epoch milliseconds.
    fn now_ms(&self) -> i64;
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to caller-provided values.
///
/// Used by tests and demos that need reproducible ids and overdue results.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now_ms: i64,
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn new(now_ms: i64, today: NaiveDate) -> Self {
        Self { now_ms, today }
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
