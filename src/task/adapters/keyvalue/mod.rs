//! Key-value store adapter for task persistence.
//!
//! The whole task collection lives under a single key as one JSON array.

mod models;
mod repository;

pub use models::{TaskRecord, TaskRecordError};
pub use repository::{DEFAULT_TASK_COLLECTION_KEY, KeyValueTaskRepository};
