//! The three benchmark programs.
//!
//! - `loop_sum` - sum of 1 through 1,000,000
//! - `factorial` - 20! recomputed 10,000 times
//! - `pipeline` - create/map/filter/reduce over 100,000 integers
//!
//! Each program exposes a `run` that writes its report lines to any
//! [`Write`] sink, so binaries hand it stdout and tests hand it a buffer.

pub mod factorial;
pub mod loop_sum;
pub mod pipeline;

use crate::error::Result;
use std::fmt;
use std::io::Write;
use tracing::debug;

/// One of the benchmark programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Loop,
    Factorial,
    Array,
}

impl Program {
    /// Every program, in the order `all` runs them.
    pub fn all() -> [Program; 3] {
        [Program::Loop, Program::Factorial, Program::Array]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Program::Loop => "loop",
            Program::Factorial => "factorial",
            Program::Array => "array",
        }
    }

    pub fn run<W: Write>(self, out: &mut W) -> Result<()> {
        debug!(program = self.name(), "running program");
        match self {
            Program::Loop => loop_sum::run(out),
            Program::Factorial => factorial::run(out),
            Program::Array => pipeline::run(out),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
