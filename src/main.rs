use clap::Parser;
use microbench::cli::{execute_command, exit_on_error, init_tracing, Cli};
use std::io;
use tracing::{debug, trace};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!("microbench started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    exit_on_error(execute_command(cli.command, &mut handle));
}
