//! Read-only projections over the task list.
//!
//! # Responsibility
//! - Narrow the full task list to what a view should show (filter + search).
//! - Answer deadline questions (`is_overdue`) without touching task state.
//!
//! # Invariants
//! - Projections never mutate or persist; they borrow and return borrows.
//! - Relative order of the underlying list is preserved in every projection.

use crate::model::task::Task;
use chrono::NaiveDate;

/// Completion-based view filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every task regardless of completion.
    #[default]
    All,
    /// Only tasks marked completed.
    Completed,
    /// Only tasks not yet completed.
    Pending,
}

/// Parses a filter name as used by view layers ("all", "completed", "pending").
///
/// Matching is case-insensitive; anything else yields `None`.
pub fn parse_filter_mode(raw: &str) -> Option<FilterMode> {
    match raw.trim().to_lowercase().as_str() {
        "all" => Some(FilterMode::All),
        "completed" => Some(FilterMode::Completed),
        "pending" => Some(FilterMode::Pending),
        _ => None,
    }
}

/// Projects the tasks a view should display.
///
/// Applies the completion filter first, then a case-insensitive substring
/// match of `search` against the task text. An empty search string matches
/// everything, so `(All, "")` is the identity projection.
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: FilterMode, search: &str) -> Vec<&'a Task> {
    let needle = search.to_lowercase();
    tasks
        .iter()
        .filter(|task| match filter {
            FilterMode::All => true,
            FilterMode::Completed => task.completed,
            FilterMode::Pending => !task.completed,
        })
        .filter(|task| needle.is_empty() || task.text.to_lowercase().contains(&needle))
        .collect()
}

/// Reports whether a deadline has passed relative to `today`.
///
/// A task with no deadline is never overdue. A deadline of exactly `today`
/// is still due, not overdue; only dates strictly before `today` count.
pub fn is_overdue(deadline: Option<NaiveDate>, today: NaiveDate) -> bool {
    match deadline {
        Some(date) => date < today,
        None => false,
    }
}
