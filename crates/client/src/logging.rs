//! Tracing setup for the dashboard client.
//!
//! The interesting events here are warnings: every degradation to the
//! embedded datasets is logged at `warn`, so the default filter keeps those
//! visible even when `info` chatter is turned off.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::LoggingSettings;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level when set. The `json` format is
/// for shipping logs off the box; anything else gets a compact terminal
/// layout for local runs.
pub fn init_logging(settings: &LoggingSettings) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if settings.format == "json" {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_target(false))
            .init();
    }
}
