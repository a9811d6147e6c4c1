//! Subscriber setup for the CLI

use tracing_subscriber::EnvFilter;

/// Level used before any configuration is loaded.
pub const DEFAULT_LEVEL: &str = "info";

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then the
/// configured level.
pub fn directive(configured: &str, verbose: bool, env: Option<&str>) -> String {
    match env.map(str::trim).filter(|e| !e.is_empty()) {
        Some(env) => env.to_string(),
        None if verbose => "debug".to_string(),
        None => configured.to_ascii_lowercase(),
    }
}

/// Install the global fmt subscriber, writing to stderr.
///
/// Calling it again is harmless; the first subscriber stays.
pub fn init(configured: &str, verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = directive(configured, verbose, env.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
