//! Local key-value persistence shared by the task and session adapters.
//!
//! The store models an on-device string store: each key holds one
//! serialized document, and every write replaces the whole document in a
//! single call.
//!
//! - Port contract in [`ports`]
//! - In-memory and filesystem implementations in [`adapters`]

pub mod adapters;
pub mod ports;
