//! Tracing setup for the CLI.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "PARA_SORT_LOG";

/// Install the stderr subscriber.
///
/// `PARA_SORT_LOG` wins when set; otherwise `--verbose` enables debug and
/// `--quiet` limits output to errors.
pub fn init(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose),
        )
        .with(filter)
        .init();
}
