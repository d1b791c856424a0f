//! Diagnostic logging setup (stderr, `RUST_LOG` aware).

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `verbosity` comes from repeated `-v` flags.
/// Calling it twice is harmless: the second install is ignored.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rinvoicer={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
