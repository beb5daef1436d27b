//! Port contracts for identity, session persistence and simulated latency.

pub mod delay;
pub mod identity;
pub mod session;

pub use delay::NetworkDelay;
pub use identity::{IdentityError, IdentityProvider};
pub use session::{SessionRepository, SessionRepositoryError, SessionRepositoryResult};
