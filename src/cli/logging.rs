//! Diagnostic logging setup
//!
//! User-facing status goes through the presenter. Diagnostics use
//! `tracing` and are written to stderr.

use tracing_subscriber::EnvFilter;

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "yt_summarize=debug,warn";

const DEFAULT_FILTER: &str = "warn";

/// Build the log filter. `RUST_LOG` wins over the verbose flag.
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose))
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    })
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .try_init();
}
