//! Domain model for personal task management.
//!
//! The task domain defines the task entity, its value types, the command
//! payloads accepted by the task service, and the query types used for
//! filtering and sorting. Validation lives in the service layer; the types
//! here only describe shape.

mod command;
mod error;
mod ids;
mod query;
mod task;

pub use command::{CreateTaskData, FieldChange, UpdateTaskData};
pub use error::{ParseTaskIdError, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use query::{SortOrder, TaskFilters, TaskSortField, TaskStats};
pub use task::{PersistedTaskData, Task, TaskPriority, TaskStatus};
