//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

use crate::Config;

/// Initializes the tracing subscriber for this process.
///
/// The filter directive comes from `config.trace_level` (for example
/// `"debug"` or `"marsgrid=trace"`), falling back to `"info"` when unset or
/// unparsable. Output goes to stderr.
///
/// Idempotent: only the first call installs a subscriber; later calls (and
/// calls in processes that already have one) are silently ignored.
///
/// # Example
///
/// ```rust
/// use marsgrid::{observability::init_tracing, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or("info");
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
