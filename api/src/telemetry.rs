//! Tracing subscriber setup

use sl_shared::config::AppConfig;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the configured level parses
const FALLBACK_FILTER: &str = "info";

/// Build the log filter: `RUST_LOG` wins over `logging.level`
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    let configured = config.logging.filter_for(config.environment);

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&configured))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Install the global subscriber
pub fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true)
        .init();
}
