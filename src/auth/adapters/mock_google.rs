//! Simulated Google sign-in.
//!
//! Stands in for a real OAuth exchange: waits a random interval within the
//! configured latency range, then vouches for a fixed demo identity.

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

use crate::auth::{
    domain::{AuthProvider, IdentityProfile},
    ports::{IdentityError, IdentityProvider, NetworkDelay},
};
use crate::config::AuthConfig;

/// Email of the demo identity.
pub const DEMO_EMAIL: &str = "demo@flowtask.app";
/// Display name of the demo identity.
pub const DEMO_NAME: &str = "Demo User";
/// Avatar of the demo identity.
pub const DEMO_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

/// Identity provider returning the demo identity after a simulated delay.
#[derive(Debug, Clone)]
pub struct MockGoogleIdentityProvider<D>
where
    D: NetworkDelay,
{
    delay: D,
    config: AuthConfig,
}

impl<D> MockGoogleIdentityProvider<D>
where
    D: NetworkDelay,
{
    /// Creates a provider pausing through `delay` for the configured range.
    #[must_use]
    pub const fn new(delay: D, config: AuthConfig) -> Self {
        Self { delay, config }
    }

    fn next_latency(&self) -> Duration {
        let min = self.config.min_delay();
        let max = self.config.max_delay().max(min);
        rand::thread_rng().gen_range(min..=max)
    }
}

#[async_trait]
impl<D> IdentityProvider for MockGoogleIdentityProvider<D>
where
    D: NetworkDelay,
{
    async fn authenticate(&self) -> Result<IdentityProfile, IdentityError> {
        self.delay.pause(self.next_latency()).await;
        Ok(IdentityProfile {
            email: DEMO_EMAIL.to_owned(),
            name: DEMO_NAME.to_owned(),
            photo_url: Some(DEMO_PHOTO_URL.to_owned()),
            provider: AuthProvider::Google,
        })
    }

    async fn revoke(&self) {
        self.delay.pause(self.next_latency()).await;
    }
}
