//! Task management for Flowtask.
//!
//! Tasks are created, edited, filtered, sorted and completed through the
//! [`services::TaskService`], which persists them through a
//! [`ports::TaskRepository`]. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
