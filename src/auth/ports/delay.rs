//! Latency abstraction used by simulated network calls.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the caller to stand in for a network round trip.
#[async_trait]
pub trait NetworkDelay: Send + Sync {
    /// Suspend execution for `duration`.
    async fn pause(&self, duration: Duration);
}
