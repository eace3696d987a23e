//! Id generation capability for tasks and subtasks.
//!
//! # Responsibility
//! - Mint unique integer ids for new tasks/subtasks.
//! - Let the store register ids loaded from persisted state so freshly
//!   minted ids never collide with them.
//!
//! # Invariants
//! - `next_id` is strictly increasing within one generator lifetime.
//! - Two calls in the same clock millisecond still return distinct ids.

use crate::clock::{Clock, SystemClock};
use crate::model::task::TaskId;

/// Id minting capability injected into the task store.
pub trait IdGenerator {
    /// Returns a fresh id, strictly greater than every id returned or
    /// observed before.
    fn next_id(&mut self) -> TaskId;

    /// Registers an id already in use, raising the floor for future ids.
    fn observe(&mut self, id: TaskId);
}

/// Wall-clock-seeded generator.
///
/// Ids carry the creation instant in epoch milliseconds, which keeps them
/// roughly sortable by age. When the clock has not advanced past the last
/// minted id (same-millisecond creations, clock skew, ids loaded from an
/// older session), the generator steps past it instead of repeating it.
pub struct TimestampIdGenerator {
    clock: Box<dyn Clock>,
    last: TaskId,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self { clock, last: 0 }
    }
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let candidate = self.clock.now_ms();
        self.last = if candidate > self.last {
            candidate
        } else {
            self.last + 1
        };
        self.last
    }

    fn observe(&mut self, id: TaskId) {
        if id > self.last {
            self.last = id;
        }
    }
}

/// Plain counting generator starting at 1.
///
/// Deterministic alternative for tests and embedders that do not want
/// timestamp-flavored ids.
#[derive(Debug, Clone, Copy)]
pub struct SequenceIdGenerator {
    next: TaskId,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let id = self.next;
        self.next += 1;
        id
    }

    fn observe(&mut self, id: TaskId) {
        if id >= self.next {
            self.next = id + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, SequenceIdGenerator, TimestampIdGenerator};
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn frozen_clock(now_ms: i64) -> FixedClock {
        FixedClock::new(now_ms, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn same_millisecond_creations_get_distinct_ids() {
        let mut ids = TimestampIdGenerator::with_clock(Box::new(frozen_clock(1_700_000_000_000)));

        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();

        assert_eq!(first, 1_700_000_000_000);
        assert_eq!(second, 1_700_000_000_001);
        assert_eq!(third, 1_700_000_000_002);
    }

    #[test]
    fn observe_raises_the_floor_above_loaded_ids() {
        let mut ids = TimestampIdGenerator::with_clock(Box::new(frozen_clock(1_000)));
        ids.observe(5_000);

        assert_eq!(ids.next_id(), 5_001);
    }

    #[test]
    fn sequence_generator_counts_up_and_respects_observed_ids() {
        let mut ids = SequenceIdGenerator::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);

        ids.observe(10);
        assert_eq!(ids.next_id(), 11);

        ids.observe(4);
        assert_eq!(ids.next_id(), 12);
    }
}
