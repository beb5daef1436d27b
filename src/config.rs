//! Runtime configuration for storage locations, field limits and the
//! simulated sign-in latency.
//!
//! Every section has sensible defaults, so an empty JSON object is a valid
//! configuration. Values are checked by [`FlowtaskConfig::validate`] after
//! loading.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::auth::adapters::DEFAULT_SESSION_KEY;
use crate::task::adapters::keyvalue::DEFAULT_TASK_COLLECTION_KEY;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this schema.
    #[error("invalid configuration document: {0}")]
    Parse(String),

    /// A field limit is zero.
    #[error("limit '{0}' must be greater than zero")]
    ZeroLimit(&'static str),

    /// A storage key is blank.
    #[error("storage key '{0}' must not be blank")]
    BlankKey(&'static str),

    /// Tasks and the session would share one storage key.
    #[error("task collection and session must use distinct storage keys")]
    SharedKey,

    /// The latency range is inverted.
    #[error("auth delay range is inverted: min {min_ms} ms exceeds max {max_ms} ms")]
    InvertedDelay {
        /// Configured lower bound.
        min_ms: u64,
        /// Configured upper bound.
        max_ms: u64,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowtaskConfig {
    /// Storage locations.
    pub storage: StorageConfig,
    /// Task field limits.
    pub limits: TaskLimits,
    /// Sign-in simulation settings.
    pub auth: AuthConfig,
}

impl FlowtaskConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and any
    /// validation error reported by [`FlowtaskConfig::validate`].
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(document).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_title_chars == 0 {
            return Err(ConfigError::ZeroLimit("max_title_chars"));
        }
        if self.limits.max_description_chars == 0 {
            return Err(ConfigError::ZeroLimit("max_description_chars"));
        }
        if self.storage.task_collection_key.trim().is_empty() {
            return Err(ConfigError::BlankKey("task_collection_key"));
        }
        if self.storage.current_session_key.trim().is_empty() {
            return Err(ConfigError::BlankKey("current_session_key"));
        }
        if self.storage.task_collection_key == self.storage.current_session_key {
            return Err(ConfigError::SharedKey);
        }
        if self.auth.min_delay_ms > self.auth.max_delay_ms {
            return Err(ConfigError::InvertedDelay {
                min_ms: self.auth.min_delay_ms,
                max_ms: self.auth.max_delay_ms,
            });
        }
        Ok(())
    }
}

/// Where and under which keys state is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the filesystem store; `None` keeps state in memory.
    pub data_dir: Option<Utf8PathBuf>,
    /// Key holding the task collection.
    pub task_collection_key: String,
    /// Key holding the current session.
    pub current_session_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            task_collection_key: DEFAULT_TASK_COLLECTION_KEY.to_owned(),
            current_session_key: DEFAULT_SESSION_KEY.to_owned(),
        }
    }
}

/// Maximum lengths, in characters, of trimmed task text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskLimits {
    /// Maximum title length.
    pub max_title_chars: usize,
    /// Maximum description length.
    pub max_description_chars: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            max_title_chars: 100,
            max_description_chars: 500,
        }
    }
}

/// Latency range simulated by the mocked identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shortest simulated delay in milliseconds.
    pub min_delay_ms: u64,
    /// Longest simulated delay in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1_000,
            max_delay_ms: 2_000,
        }
    }
}

impl AuthConfig {
    /// Configuration with no simulated latency.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            min_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Returns the shortest delay.
    #[must_use]
    pub const fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    /// Returns the longest delay.
    #[must_use]
    pub const fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}
