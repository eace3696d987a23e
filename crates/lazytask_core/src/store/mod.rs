//! Task list ownership and mutation.
//!
//! # Responsibility
//! - Host the single component that owns the task list, applies every
//!   mutation and persists the result.
//!
//! # Invariants
//! - No other module writes the task list; callers hold a `TaskStore` and go
//!   through its operations.

mod task_store;

pub use task_store::{StoreError, StoreResult, TaskStore, TASKS_KEY};
