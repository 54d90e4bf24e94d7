//! Token check command
//!
//! Runs the token parser on each argument and reports the parsed fields,
//! without assembling a full configuration.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tmatch_core::NetAddr;

/// Check command arguments
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Address tokens to parse (IP, IP@PORT or @PORT)
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,
}

/// Execute the check command
///
/// Reports every token and fails after the report if any was invalid.
pub fn execute(args: CheckArgs) -> Result<()> {
    let mut failures = 0usize;

    for token in &args.tokens {
        match token.parse::<NetAddr>() {
            Ok(na) => {
                let ip = na
                    .ip
                    .map_or_else(|| "-".dimmed().to_string(), |ip| ip.to_string());
                let port = na
                    .port
                    .map_or_else(|| "-".dimmed().to_string(), |p| p.to_string());
                println!(
                    "{} '{}'  ip: {}  port: {}",
                    "✓".green(),
                    token,
                    ip.cyan(),
                    port.cyan()
                );
            }
            Err(e) => {
                failures += 1;
                println!("{} '{}'  {}", "✗".red(), token, e.to_string().red());
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} invalid token(s)");
    }
    Ok(())
}
