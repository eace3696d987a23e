//! Core domain logic for LazyTask.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod ids;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod storage;
pub mod store;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::{IdGenerator, SequenceIdGenerator, TimestampIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Subtask, SubtaskId, Task, TaskId};
pub use prompt::{ScriptedPrompt, UserPrompt};
pub use storage::{
    open_db, open_db_in_memory, KvStore, MemoryKvStore, SqliteKvStore, StorageError,
    StorageResult,
};
pub use store::{StoreError, StoreResult, TaskStore, TASKS_KEY};
pub use view::{is_overdue, parse_filter_mode, visible_tasks, FilterMode};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
