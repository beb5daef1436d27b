//! Port contracts for local key-value persistence.

pub mod store;

pub use store::{KeyValueStore, StorageError, StorageResult};
