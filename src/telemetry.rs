//! Structured logging setup.
//!
//! Library code only emits `tracing` events. Embedding applications call
//! [`init_tracing`] once at startup to route them to standard output.

use tracing_subscriber::{EnvFilter, fmt};

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TelemetryFormat {
    /// Human-readable single-line events.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Installs a global `tracing` subscriber filtered by `RUST_LOG`.
///
/// Falls back to the `info` level when `RUST_LOG` is unset or invalid.
/// Returns `false` when a global subscriber was already installed, which
/// leaves the existing one in place.
pub fn init_tracing(format: TelemetryFormat) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter);
    let result = match format {
        TelemetryFormat::Pretty => builder.try_init(),
        TelemetryFormat::Json => builder.json().try_init(),
    };
    result.is_ok()
}
