//! CLI plumbing shared by the binaries
//!
//! - `args` - clap argument structures
//! - `logging` - tracing subscriber setup
//! - `router` - dispatch from parsed commands to programs

pub mod args;
pub mod logging;
pub mod router;

pub use args::{Cli, Commands, StandaloneArgs};
pub use logging::{get_log_level, init_tracing};
pub use router::{execute_command, run_program, run_to_stdout};

use crate::programs::Program;
use clap::Parser;
use tracing::{debug, error};

/// Entry point for the single-program binaries.
///
/// Parses `-v` and runs `program` against stdout.
pub fn standalone_main(program: Program) {
    let args = StandaloneArgs::parse();
    init_tracing(args.verbose);
    debug!(program = program.name(), verbose = args.verbose, "started");

    exit_on_error(run_to_stdout(program));
}

/// Log a fatal error, print it to stderr and exit with status 1.
pub fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
