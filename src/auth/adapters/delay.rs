//! Network delay implementations.

use async_trait::async_trait;
use std::time::Duration;

use crate::auth::ports::NetworkDelay;

/// Delay backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl NetworkDelay for TokioDelay {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Delay that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl NetworkDelay for NoDelay {
    async fn pause(&self, _duration: Duration) {}
}
