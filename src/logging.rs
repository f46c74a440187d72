//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so stdout stays free for command output. The
//! level comes from `RUST_LOG` when set, otherwise `info` (or `debug` with
//! `--debug`).

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default level for the given `--debug` setting.
pub fn default_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level(debug).into())
        .from_env_lossy()
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(std::io::stderr)
        .with_target(debug)
        .try_init();
}
