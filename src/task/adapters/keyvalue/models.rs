//! Serialized record model for stored tasks.

use crate::task::domain::{
    ParseTaskPriorityError, ParseTaskStatusError, PersistedTaskData, Task, TaskId, TaskPriority,
    TaskStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JSON shape of one task inside the stored collection.
///
/// Dates are RFC 3339 strings; status and priority use their lowercase
/// storage names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Task identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Completion state.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Error raised when a stored record cannot be mapped onto a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRecordError {
    /// The stored status is not a known status name.
    #[error(transparent)]
    Status(#[from] ParseTaskStatusError),
    /// The stored priority is not a known priority name.
    #[error(transparent)]
    Priority(#[from] ParseTaskPriorityError),
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            due_date: task.due_date(),
            status: task.status().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskRecordError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let TaskRecord {
            id,
            title,
            description,
            due_date,
            status: persisted_status,
            priority: persisted_priority,
            created_at,
            updated_at,
        } = record;

        let status = TaskStatus::try_from(persisted_status.as_str())?;
        let priority = TaskPriority::try_from(persisted_priority.as_str())?;

        Ok(Self::from_persisted(PersistedTaskData {
            id: TaskId::from_uuid(id),
            title,
            description,
            due_date,
            status,
            priority,
            created_at,
            updated_at,
        }))
    }
}
