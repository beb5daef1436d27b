//! Identity provider port.

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::domain::IdentityProfile;

/// Source of authenticated identities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Runs the provider's sign-in flow and returns the verified identity.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] when the provider refuses or cannot
    /// complete the sign-in.
    async fn authenticate(&self) -> Result<IdentityProfile, IdentityError>;

    /// Ends the provider-side session.
    async fn revoke(&self);
}

/// Errors returned by identity providers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The user or provider declined the sign-in.
    #[error("sign-in was rejected: {0}")]
    Rejected(String),

    /// The provider could not be reached.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}
