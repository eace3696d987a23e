//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task/subtask records and their wire shape.
//! - Provide small lifecycle helpers for completion toggling.
//!
//! # Invariants
//! - `id` is stable and never reused for another task in the same list.
//! - `priority` is always one of the three known levels.
//! - Decoding is loose for optional fields: a missing or unreadable
//!   `completed`/`deadline`/`priority`/`subtasks` degrades to its default
//!   instead of failing the whole blob. `id` and `text` stay mandatory.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Stable identifier for one task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values come from an injected [`crate::ids::IdGenerator`] and are strictly
/// increasing within one store lifetime.
pub type TaskId = i64;

/// Stable identifier for one subtask, drawn from the same generator as
/// [`TaskId`] and therefore unique within its parent's sequence.
pub type SubtaskId = i64;

/// Urgency level attached to every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// One checklist item attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    /// Stable id within the parent task's subtask sequence.
    pub id: SubtaskId,
    /// User-supplied label, non-empty as entered.
    pub text: String,
    /// Completion flag, independent of the parent task's own flag.
    #[serde(default, deserialize_with = "lenient_completed")]
    pub completed: bool,
}

impl Subtask {
    /// Creates a pending subtask.
    pub fn new(id: SubtaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Canonical task record.
///
/// The serialized shape is the whole contract with persisted blobs: one JSON
/// array of these records lives under a single storage key, so field names
/// and value spellings must stay stable across releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used for every targeted mutation.
    pub id: TaskId,
    /// Task label. Trimmed and non-empty at creation time; edits replace it
    /// verbatim without re-validation.
    pub text: String,
    /// Completion flag.
    #[serde(default, deserialize_with = "lenient_completed")]
    pub completed: bool,
    /// Optional due date. Calendar date only, no time component.
    #[serde(default, deserialize_with = "lenient_deadline")]
    pub deadline: Option<NaiveDate>,
    /// Urgency level, `Medium` when the stored value is missing or unknown.
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Priority,
    /// Owned checklist in insertion order. Entries that cannot be decoded
    /// are dropped on load instead of failing the task.
    #[serde(default, deserialize_with = "lenient_subtasks")]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Creates a pending task with no deadline and default priority.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            deadline: None,
            priority: Priority::default(),
            subtasks: Vec::new(),
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Returns the subtask matching `id`, if any.
    pub fn subtask(&self, id: SubtaskId) -> Option<&Subtask> {
        self.subtasks.iter().find(|subtask| subtask.id == id)
    }

    /// Returns the subtask matching `id` for mutation, if any.
    pub fn subtask_mut(&mut self, id: SubtaskId) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|subtask| subtask.id == id)
    }
}

/// Normalizes task text for creation: trims surrounding whitespace and
/// rejects the result when nothing remains.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses one priority label, case-insensitively.
pub fn parse_priority(value: &str) -> Option<Priority> {
    match value.trim().to_ascii_lowercase().as_str() {
        "high" => Some(Priority::High),
        "medium" => Some(Priority::Medium),
        "low" => Some(Priority::Low),
        _ => None,
    }
}

fn lenient_deadline<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(raw) => {
            NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT).ok()
        }
        _ => None,
    })
}

fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(raw) => parse_priority(&raw).unwrap_or_default(),
        _ => Priority::default(),
    })
}

fn lenient_completed<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

fn lenient_subtasks<'de, D>(deserializer: D) -> Result<Vec<Subtask>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}
