//! Flowtask: personal task management with on-device persistence.
//!
//! This crate provides the task domain (creation, editing, filtering,
//! sorting, completion and statistics), a mocked sign-in flow with a single
//! persisted session, and the key-value persistence both rely on.
//!
//! # Architecture
//!
//! Flowtask follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and identity
//! - **Adapters**: Concrete implementations of ports (key-value stores,
//!   simulated identity provider)
//!
//! # Modules
//!
//! - [`task`]: Task entity, repository and service
//! - [`auth`]: Users, sessions and sign-in
//! - [`storage`]: Key-value store port and adapters
//! - [`config`]: Runtime configuration
//! - [`app`]: Composition root wiring configuration into services
//! - [`telemetry`]: Structured logging setup

pub mod app;
pub mod auth;
pub mod config;
pub mod storage;
pub mod task;
pub mod telemetry;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
