//! Logging setup for tutorials and tests
//!
//! One call wires up `tracing-subscriber` with an environment filter,
//! so `RUST_LOG=browser_harness=debug` turns on harness internals
//! without touching code. Calling it twice is harmless; the second
//! init is ignored.

use tracing_subscriber::EnvFilter;

/// Initialize logging with an `info` default level
pub fn init() {
    init_with_default("info");
}

/// Initialize logging with the given default filter directive
///
/// `RUST_LOG` wins when set.
pub fn init_with_default(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
