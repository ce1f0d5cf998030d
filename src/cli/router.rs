//! Command routing and execution
//!
//! Maps parsed CLI input onto the programs and writes their output.

use crate::cli::args::Commands;
use crate::programs::Program;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::debug;

/// Run every program the command names, in order, into `out`.
pub fn execute_command<W: Write>(command: Commands, out: &mut W) -> Result<()> {
    debug!(?command, "executing command");
    for program in command.programs() {
        run_program(program, out)?;
    }
    Ok(())
}

/// Run one program into `out` and flush it.
pub fn run_program<W: Write>(program: Program, out: &mut W) -> Result<()> {
    program
        .run(out)
        .with_context(|| format!("{program} program failed"))?;
    out.flush()
        .with_context(|| format!("Failed to flush {program} output"))?;
    Ok(())
}

/// Run one program against a locked stdout.
pub fn run_to_stdout(program: Program) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_program(program, &mut handle)
}
