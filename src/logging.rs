//! Structured logging setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, LogFormat};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `config.log_level` is the filter.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().with_target(true)).try_init(),
    };

    if installed.is_ok() {
        tracing::info!(
            level = %config.log_level,
            format = ?config.log_format,
            "logging initialized"
        );
    }
}
