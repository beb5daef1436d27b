//! Adapter implementations of the task ports.

pub mod keyvalue;
