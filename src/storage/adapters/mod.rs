//! Key-value store adapters.

pub mod filesystem;
pub mod memory;

pub use filesystem::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
