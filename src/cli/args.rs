//! CLI argument structures
//!
//! `Cli` drives the umbrella `microbench` binary. `StandaloneArgs` is the
//! whole surface of the single-program binaries, which run with no
//! arguments at all.

use crate::programs::Program;
use clap::{Parser, Subcommand};

/// Run the loop, factorial and array micro-benchmark programs
#[derive(Parser, Debug)]
#[command(name = "microbench")]
#[command(about = "microbench - Loop, factorial and array micro-benchmark programs", long_about = None)]
#[command(version)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose logging on stderr (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Sum the integers 1 through 1,000,000
    Loop,

    /// Compute factorial(20) recursively, 10,000 times
    Factorial,

    /// Create, map, filter and reduce 100,000 integers
    Array,

    /// Run loop, factorial and array in that order
    All,
}

impl Commands {
    /// Programs this command runs, in order.
    pub fn programs(self) -> Vec<Program> {
        match self {
            Commands::Loop => vec![Program::Loop],
            Commands::Factorial => vec![Program::Factorial],
            Commands::Array => vec![Program::Array],
            Commands::All => Program::all().to_vec(),
        }
    }
}

/// Arguments accepted by the standalone program binaries
#[derive(Parser, Debug)]
#[command(version)]
pub struct StandaloneArgs {
    /// Enable verbose logging on stderr (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
        StandaloneArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommand_with_verbosity() {
        let cli = Cli::try_parse_from(["microbench", "-vv", "array"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.command, Commands::Array);
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["microbench", "loop", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["microbench"]).is_err());
        assert!(Cli::try_parse_from(["microbench", "-v"]).is_err());
    }

    #[test]
    fn test_all_expands_in_order() {
        assert_eq!(
            Commands::All.programs(),
            vec![Program::Loop, Program::Factorial, Program::Array]
        );
        assert_eq!(Commands::Factorial.programs(), vec![Program::Factorial]);
    }

    #[test]
    fn test_standalone_takes_no_positional_args() {
        assert!(StandaloneArgs::try_parse_from(["bench_loop", "extra"]).is_err());
        let args = StandaloneArgs::try_parse_from(["bench_loop"]).unwrap();
        assert_eq!(args.verbose, 0);
    }
}
