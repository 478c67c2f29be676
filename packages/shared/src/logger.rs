//! Logger setup shared by every flatfile binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Logs are written to stderr
/// so that stdout only carries the tool's results.
///
/// Calling this more than once is harmless: later calls are ignored.
pub fn setup_logger(app_name: &str, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let initialized = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if initialized {
        tracing::debug!("{} logger initialized", app_name);
    }
}
