//! Authentication and the single persisted user session.
//!
//! Sign-in goes through an [`ports::IdentityProvider`]; the resulting user is
//! stored as the one current session through a
//! [`ports::SessionRepository`]. The absence of a stored user means the
//! application is signed out.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
