//! Command payloads accepted by the task service.

use super::{TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskData {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: Option<TaskPriority>,
}

impl CreateTaskData {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the task priority. Unset priorities default to medium.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description, if provided.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if provided.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the requested priority, if provided.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }
}

/// Change requested for a single optional field in a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldChange<T> {
    /// Keep the stored value.
    #[default]
    Unchanged,
    /// Replace the stored value.
    Set(T),
    /// Remove the stored value.
    Clear,
}

impl<T> FieldChange<T> {
    /// Returns whether the update leaves the field untouched.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Partial update payload; only fields that were set are applied.
///
/// A description set to an empty or whitespace-only string clears the
/// stored description, as does [`UpdateTaskData::clear_description`]. A
/// blank title is ignored and the stored title kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskData {
    title: Option<String>,
    description: FieldChange<String>,
    due_date: FieldChange<DateTime<Utc>>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

impl UpdateTaskData {
    /// Creates an empty update that only refreshes the modification time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = FieldChange::Set(description.into());
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = FieldChange::Clear;
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = FieldChange::Set(due_date);
        self
    }

    /// Removes the due date.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = FieldChange::Clear;
        self
    }

    /// Replaces the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the requested title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the requested description change.
    #[must_use]
    pub const fn description(&self) -> &FieldChange<String> {
        &self.description
    }

    /// Returns the requested due date change.
    #[must_use]
    pub const fn due_date(&self) -> &FieldChange<DateTime<Utc>> {
        &self.due_date
    }

    /// Returns the requested status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the requested priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }
}
