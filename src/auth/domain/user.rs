//! User entity and sign-in identity types.

use super::{ParseAuthProviderError, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Mechanism a user signed in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthProvider {
    /// Google account.
    Google,
    /// Email and password.
    Email,
}

impl AuthProvider {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Email => "email",
        }
    }
}

impl TryFrom<&str> for AuthProvider {
    type Error = ParseAuthProviderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "email" => Ok(Self::Email),
            _ => Err(ParseAuthProviderError(value.to_owned())),
        }
    }
}

/// Identity details returned by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityProfile {
    /// Verified email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar URL, if the provider has one.
    pub photo_url: Option<String>,
    /// Provider that vouched for the identity.
    pub provider: AuthProvider,
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    photo_url: Option<String>,
    provider: AuthProvider,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted identifier.
    pub id: UserId,
    /// Persisted email address.
    pub email: String,
    /// Persisted display name.
    pub name: String,
    /// Persisted avatar URL, if any.
    pub photo_url: Option<String>,
    /// Persisted provider.
    pub provider: AuthProvider,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user from a freshly authenticated identity.
    #[must_use]
    pub fn from_identity(profile: IdentityProfile, clock: &impl Clock) -> Self {
        Self {
            id: UserId::for_email(&profile.email),
            email: profile.email,
            name: profile.name,
            photo_url: profile.photo_url,
            provider: profile.provider,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            email: data.email,
            name: data.name,
            photo_url: data.photo_url,
            provider: data.provider,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar URL, if any.
    #[must_use]
    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    /// Returns the provider used to sign in.
    #[must_use]
    pub const fn provider(&self) -> AuthProvider {
        self.provider
    }

    /// Returns when the session user was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
