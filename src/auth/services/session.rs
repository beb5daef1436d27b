//! Sign-in, sign-out and current-user lookup.

use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::auth::{
    domain::User,
    ports::{IdentityError, IdentityProvider, SessionRepository, SessionRepositoryError},
};

/// Service-level errors for authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The identity provider did not produce an identity.
    #[error("auth failed: {0}")]
    Identity(#[from] IdentityError),
    /// The session could not be stored or cleared.
    #[error("auth failed: {0}")]
    Session(#[from] SessionRepositoryError),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication orchestration service.
///
/// The session moves between two states only: signed out (no stored user)
/// and signed in (exactly one stored user). A failed sign-in leaves the
/// session untouched.
#[derive(Clone)]
pub struct AuthService<S, P, C>
where
    S: SessionRepository,
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    sessions: Arc<S>,
    identity: Arc<P>,
    clock: Arc<C>,
}

impl<S, P, C> AuthService<S, P, C>
where
    S: SessionRepository,
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(sessions: Arc<S>, identity: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            sessions,
            identity,
            clock,
        }
    }

    /// Signs in through the Google identity provider and stores the session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Identity`] when the provider rejects the sign-in
    /// and [`AuthError::Session`] when the session cannot be stored.
    pub async fn sign_in_with_google(&self) -> AuthResult<User> {
        let profile = self.identity.authenticate().await?;
        let user = User::from_identity(profile, &*self.clock);
        self.sessions.save(&user).await?;
        info!(user_id = %user.id(), provider = user.provider().as_str(), "user signed in");
        Ok(user)
    }

    /// Ends the provider session and clears the stored user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Session`] when the stored session cannot be
    /// removed.
    pub async fn sign_out(&self) -> AuthResult<()> {
        self.identity.revoke().await;
        self.sessions.clear().await?;
        info!("user signed out");
        Ok(())
    }

    /// Returns the signed-in user, or `None` when signed out.
    pub async fn get_current_user(&self) -> Option<User> {
        self.sessions.load().await
    }

    /// Returns whether a user is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.get_current_user().await.is_some()
    }
}
