use clap::Parser;
use hartriage_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    cli.run_to(&mut stdout.lock());
}
