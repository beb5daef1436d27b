//! Service layer for task creation, editing, listing and completion.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::query::{apply_filters, summarize};
use super::validation::{normalize_description, normalize_title, normalize_title_change};
use crate::config::TaskLimits;
use crate::task::{
    domain::{
        CreateTaskData, FieldChange, Task, TaskDomainError, TaskFilters, TaskId, TaskPriority,
        TaskStats, UpdateTaskData,
    },
    ports::{TaskRepository, TaskRepositoryError},
};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The targeted task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Owns id assignment, text normalization and query semantics; persistence
/// is delegated to the injected repository.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    limits: TaskLimits,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service with default field limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            limits: TaskLimits::default(),
        }
    }

    /// Replaces the field limits enforced on create and update.
    #[must_use]
    pub fn with_limits(mut self, limits: TaskLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Creates an open task from `data`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the trimmed title is
    /// empty or a text field is too long, and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_task(&self, data: CreateTaskData) -> TaskServiceResult<Task> {
        let title = normalize_title(data.title(), &self.limits)?;
        let description = data
            .description()
            .map(|raw| normalize_description(raw, &self.limits))
            .transpose()?
            .flatten();
        let priority = data.priority().unwrap_or(TaskPriority::Medium);

        let task = Task::new(title, priority, &*self.clock)
            .with_description(description)
            .with_due_date(data.due_date());
        let created = self.repository.create(&task).await?;
        debug!(task_id = %created.id(), "task created");
        Ok(created)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    pub async fn get_task_by_id(&self, id: TaskId) -> Option<Task> {
        self.repository.get_by_id(id).await
    }

    /// Lists tasks matching `filters`.
    pub async fn get_all_tasks(&self, filters: &TaskFilters) -> Vec<Task> {
        let tasks = self.repository.get_all().await;
        apply_filters(tasks, filters)
    }

    /// Applies a partial update to an existing task.
    ///
    /// Only fields set on `data` change. The modification timestamp is
    /// refreshed even when no field changes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has `id`,
    /// [`TaskServiceError::Validation`] when a supplied text field is too
    /// long, and [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update_task(&self, id: TaskId, data: UpdateTaskData) -> TaskServiceResult<Task> {
        let mut task = self
            .repository
            .get_by_id(id)
            .await
            .ok_or(TaskServiceError::NotFound(id))?;

        if let Some(title) = data
            .title()
            .map(|raw| normalize_title_change(raw, &self.limits))
            .transpose()?
            .flatten()
        {
            task.set_title(title);
        }

        match data.description() {
            FieldChange::Unchanged => {}
            FieldChange::Set(raw) => {
                task.set_description(normalize_description(raw, &self.limits)?);
            }
            FieldChange::Clear => task.set_description(None),
        }

        match data.due_date() {
            FieldChange::Unchanged => {}
            FieldChange::Set(due_date) => task.set_due_date(Some(*due_date)),
            FieldChange::Clear => task.set_due_date(None),
        }

        if let Some(status) = data.status() {
            task.set_status(status);
        }
        if let Some(priority) = data.priority() {
            task.set_priority(priority);
        }
        task.touch(&*self.clock);

        let updated = self
            .repository
            .update(id, &task)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        debug!(task_id = %id, "task updated");
        Ok(updated)
    }

    /// Deletes a task, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<bool> {
        let removed = self.repository.delete(id).await?;
        debug!(task_id = %id, removed, "task delete requested");
        Ok(removed)
    }

    /// Flips a task between open and completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has `id` and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn toggle_task_status(&self, id: TaskId) -> TaskServiceResult<Task> {
        let task = self
            .repository
            .get_by_id(id)
            .await
            .ok_or(TaskServiceError::NotFound(id))?;
        let update = UpdateTaskData::new().with_status(task.status().toggled());
        self.update_task(id, update).await
    }

    /// Summarises the stored tasks against the current clock time.
    pub async fn get_task_stats(&self) -> TaskStats {
        let tasks = self.get_all_tasks(&TaskFilters::default()).await;
        summarize(&tasks, self.clock.utc())
    }
}
