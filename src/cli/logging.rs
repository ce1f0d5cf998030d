//! Tracing setup shared by every binary.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the filter, letting `RUST_LOG` take precedence over `-v`.
pub fn build_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(get_log_level(verbose)))
}

/// Install the global subscriber. Logs go to stderr; stdout carries only
/// program output. Colors only when stderr is a terminal.
pub fn init_tracing(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 3)
        .with_line_number(verbose >= 3)
        .try_init();
}
