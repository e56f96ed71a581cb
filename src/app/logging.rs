//! Logging setup for the command-line front end.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to binaries. Output goes to stderr so stdout stays machine-readable.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// Honors `RUST_LOG` (e.g. `RUST_LOG=setting_mixins=debug`), falling back
/// to [`DEFAULT_FILTER`]. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).try_init();
}
