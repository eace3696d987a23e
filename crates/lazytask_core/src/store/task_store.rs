//! The task store: sole owner and mutator of the task list.
//!
//! # Responsibility
//! - Load the persisted list once at construction, degrading malformed or
//!   unreadable state to an empty list.
//! - Apply every mutation and persist the full list before returning.
//! - Serve read-only projections of the list.
//!
//! # Invariants
//! - After every successful mutation the persisted blob equals the in-memory
//!   list exactly.
//! - Task ids are unique across the list; the id generator is seeded with
//!   every loaded id before the first mint.
//! - Domain-level misses (unknown id, empty input, declined confirm) are
//!   silent no-ops reported through the return payload, never errors.

use crate::ids::{IdGenerator, TimestampIdGenerator};
use crate::model::task::{normalize_text, Priority, Subtask, SubtaskId, Task, TaskId};
use crate::prompt::UserPrompt;
use crate::storage::{KvStore, StorageError};
use crate::view::{self, FilterMode};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key the whole task list serializes under.
///
/// Kept spelled `"todos"` so blobs written by earlier builds keep loading.
pub const TASKS_KEY: &str = "todos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure persisting the task list.
///
/// Every mutating operation can return this; the in-memory list keeps the
/// applied mutation, so the caller may retry the write or surface the error.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Codec(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "task storage failed: {err}"),
            Self::Codec(err) => write!(f, "task list serialization failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Owning facade over the task list.
///
/// Constructed over an injected [`KvStore`]; every mutation persists the full
/// list under [`TASKS_KEY`] before returning. Confirmation- and input-gated
/// operations take a [`UserPrompt`] so the core stays headless.
pub struct TaskStore<S: KvStore> {
    storage: S,
    ids: Box<dyn IdGenerator>,
    tasks: Vec<Task>,
}

impl<S: KvStore> TaskStore<S> {
    /// Opens a store with the default wall-clock-seeded id generator.
    ///
    /// Loading never fails: an absent key, an unreadable backend or a
    /// malformed blob all degrade to an empty list.
    pub fn open(storage: S) -> Self {
        Self::open_with(storage, Box::new(TimestampIdGenerator::new()))
    }

    /// Opens a store with a caller-provided id generator.
    ///
    /// Every id found in the loaded list is fed to the generator before the
    /// first mint, so fresh ids never collide with persisted ones.
    pub fn open_with(storage: S, mut ids: Box<dyn IdGenerator>) -> Self {
        let tasks = load_tasks(&storage);
        for task in &tasks {
            ids.observe(task.id);
            for subtask in &task.subtasks {
                ids.observe(subtask.id);
            }
        }
        info!(
            "event=store_open module=store status=ok count={}",
            tasks.len()
        );
        Self { storage, ids, tasks }
    }

    /// The underlying ordered task list.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Projects the tasks a view should display; see [`view::visible_tasks`].
    pub fn visible_tasks(&self, filter: FilterMode, search: &str) -> Vec<&Task> {
        view::visible_tasks(&self.tasks, filter, search)
    }

    /// Appends a new pending task.
    ///
    /// `text` is trimmed first; when nothing remains the list is untouched,
    /// nothing persists, and `Ok(None)` is returned. Otherwise the new
    /// task's id is returned.
    pub fn add(
        &mut self,
        text: &str,
        deadline: Option<NaiveDate>,
        priority: Priority,
    ) -> StoreResult<Option<TaskId>> {
        let Some(text) = normalize_text(text) else {
            return Ok(None);
        };

        let id = self.ids.next_id();
        let mut task = Task::new(id, text);
        task.deadline = deadline;
        task.priority = priority;
        self.tasks.push(task);
        self.persist()?;
        Ok(Some(id))
    }

    /// Flips the completion flag of the matching task.
    ///
    /// Returns `Ok(false)` without persisting when `id` is unknown.
    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.toggle();
        self.persist()?;
        Ok(true)
    }

    /// Removes the matching task after user confirmation.
    ///
    /// A declined confirm or an unknown `id` leaves the list untouched.
    /// Removal takes the task's subtasks with it; they are owned data.
    pub fn delete(&mut self, id: TaskId, prompt: &dyn UserPrompt) -> StoreResult<bool> {
        if !prompt.confirm("Are you sure you want to delete this task?") {
            return Ok(false);
        }
        self.remove(id)
    }

    /// Removes the matching task unconditionally.
    ///
    /// The primitive behind [`TaskStore::delete`]; `Ok(false)` when `id` is
    /// unknown.
    pub fn remove(&mut self, id: TaskId) -> StoreResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Replaces the text of the matching task.
    ///
    /// `new_text` is applied verbatim when non-empty; creation-time trimming
    /// is not re-applied. Empty text or an unknown `id` is a no-op.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> StoreResult<bool> {
        if new_text.is_empty() {
            return Ok(false);
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.text = new_text.to_string();
        self.persist()?;
        Ok(true)
    }

    /// Replaces the text of the matching task with a prompted value.
    ///
    /// The current text is offered as the dialog default. A cancelled or
    /// empty reply, or an unknown `id`, is a no-op.
    pub fn edit_with_prompt(&mut self, id: TaskId, prompt: &dyn UserPrompt) -> StoreResult<bool> {
        let Some(current) = self
            .tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.text.clone())
        else {
            return Ok(false);
        };
        match prompt.prompt_text("Edit task:", Some(&current)) {
            Some(reply) => self.edit(id, &reply),
            None => Ok(false),
        }
    }

    /// Appends a prompted subtask to the matching task.
    ///
    /// A cancelled or empty reply, or an unknown `id`, is a no-op.
    pub fn add_subtask(
        &mut self,
        id: TaskId,
        prompt: &dyn UserPrompt,
    ) -> StoreResult<Option<SubtaskId>> {
        if !self.tasks.iter().any(|task| task.id == id) {
            return Ok(None);
        }
        match prompt.prompt_text("Enter subtask:", None) {
            Some(reply) => self.push_subtask(id, &reply),
            None => Ok(None),
        }
    }

    /// Appends a subtask with the given text to the matching task.
    ///
    /// The prompt-free primitive behind [`TaskStore::add_subtask`]; empty
    /// text or an unknown `id` is a no-op.
    pub fn push_subtask(&mut self, id: TaskId, text: &str) -> StoreResult<Option<SubtaskId>> {
        if text.is_empty() || !self.tasks.iter().any(|task| task.id == id) {
            return Ok(None);
        }
        let subtask_id = self.ids.next_id();
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.subtasks.push(Subtask::new(subtask_id, text));
        self.persist()?;
        Ok(Some(subtask_id))
    }

    /// Flips the completion flag of the matching subtask.
    ///
    /// Either id unknown is a no-op.
    pub fn toggle_subtask(
        &mut self,
        task_id: TaskId,
        subtask_id: SubtaskId,
    ) -> StoreResult<bool> {
        let Some(subtask) = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .and_then(|task| task.subtask_mut(subtask_id))
        else {
            return Ok(false);
        };
        subtask.toggle();
        self.persist()?;
        Ok(true)
    }

    fn persist(&mut self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.tasks)?;
        self.storage.set(TASKS_KEY, &blob)?;
        debug!(
            "event=tasks_saved module=store status=ok count={} bytes={}",
            self.tasks.len(),
            blob.len()
        );
        Ok(())
    }
}

fn load_tasks<S: KvStore>(storage: &S) -> Vec<Task> {
    let blob = match storage.get(TASKS_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=tasks_load module=store status=degraded reason=storage error={err}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Task>>(&blob) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!("event=tasks_load module=store status=degraded reason=malformed_blob error={err}");
            Vec::new()
        }
    }
}
