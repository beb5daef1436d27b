//! Domain model for users and sign-in identities.

mod error;
mod ids;
mod user;

pub use error::ParseAuthProviderError;
pub use ids::UserId;
pub use user::{AuthProvider, IdentityProfile, PersistedUserData, User};
