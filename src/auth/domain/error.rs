//! Error types for the auth domain.

use thiserror::Error;

/// Error returned while parsing an auth provider name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown auth provider: {0}")]
pub struct ParseAuthProviderError(pub String);
