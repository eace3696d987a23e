//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task/subtask records used by core business logic.
//! - Keep the persisted wire shape stable and tolerant of older blobs.
//!
//! # Invariants
//! - Every task is identified by a stable integer `TaskId`.
//! - `priority` is always one of the three known levels.
//! - Subtasks are owned by their parent task and share its lifecycle.

pub mod task;
