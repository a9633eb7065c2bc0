//! Logging system initialization.

use tracing_subscriber::EnvFilter;

/// Initialize console logging.
///
/// `RUST_LOG` controls the filter; the default level is `info`. Calling this
/// twice panics (the subscriber is global), so it belongs in `main` only.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
