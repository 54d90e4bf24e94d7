//! tmatch CLI
//!
//! Command-line front end for building validated traffic match criteria.

mod args;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use args::Args;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    logging::init(&args);

    // Run the main logic
    let result = run(args);

    if let Err(ref e) = result {
        error!("fatal: {:#}", e);
    }

    result
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Some(commands::Command::Check(check_args)) => commands::check::execute(check_args),
        Some(commands::Command::Completions(comp_args)) => {
            commands::completions::execute(comp_args)
        }
        // `show` is also the default when no subcommand is given
        Some(commands::Command::Show) | None => commands::show::execute(&args),
    }
}
