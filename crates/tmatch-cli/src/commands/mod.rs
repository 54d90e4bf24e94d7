//! CLI commands

pub mod check;
pub mod completions;
pub mod show;

use clap::Subcommand;

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the match configuration and display it (default)
    Show,

    /// Parse individual address tokens and report their fields
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
