//! Query types for listing and summarising tasks.

use super::{TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};

/// Field used to order listed tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSortField {
    /// Creation timestamp.
    CreatedAt,
    /// Due date; tasks without one sort last.
    DueDate,
    /// Priority by severity.
    Priority,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Declarative query narrowing and ordering the listed tasks.
///
/// Filters apply in a fixed order: status, priority, text search, then
/// sorting. An empty filter lists every task, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilters {
    /// Keep only tasks with this status.
    pub status: Option<TaskStatus>,
    /// Keep only tasks with this priority.
    pub priority: Option<TaskPriority>,
    /// Case-insensitive substring matched against title or description.
    pub search: Option<String>,
    /// Field to sort by; `None` keeps newest-first order.
    pub sort_by: Option<TaskSortField>,
    /// Direction used with `sort_by`.
    pub sort_order: SortOrder,
}

impl TaskFilters {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to `status`.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to `priority`.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts results to tasks mentioning `search`.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Orders results by `field` in `order`.
    #[must_use]
    pub fn sorted_by(mut self, field: TaskSortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.sort_order = order;
        self
    }
}

/// Summary counts over the stored tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of open tasks.
    pub open: usize,
    /// Number of open tasks whose due date has passed.
    pub overdue: usize,
}
