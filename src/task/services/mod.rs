//! Application services for task management.

mod lifecycle;
mod query;
mod validation;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
pub use query::{apply_filters, summarize};
