//! Command-line argument parsing

use crate::commands::Command;
use clap::{Parser, ValueEnum};

/// tmatch - traffic match-criteria front end
///
/// Builds a validated address/port match configuration from host, source
/// and destination criteria. Tokens take the form `IP`, `IP@PORT` or
/// `@PORT`; each option is repeatable and accepts comma-separated lists.
#[derive(Parser, Debug)]
#[command(name = "tmatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Match either-direction address: IP@PORT, comma separated or repeated
    #[arg(
        short = 'H',
        long,
        value_name = "ADDR",
        value_delimiter = ',',
        action = clap::ArgAction::Append,
        global = true
    )]
    pub host: Vec<String>,

    /// Match source address: IP@PORT, comma separated or repeated
    #[arg(
        short = 's',
        long,
        value_name = "ADDR",
        value_delimiter = ',',
        action = clap::ArgAction::Append,
        global = true
    )]
    pub src: Vec<String>,

    /// Match destination address: IP@PORT, comma separated or repeated
    #[arg(
        short = 'd',
        long,
        value_name = "ADDR",
        value_delimiter = ',',
        action = clap::ArgAction::Append,
        global = true
    )]
    pub dst: Vec<String>,

    /// IPv4 netmask prefix width (0 = exact address)
    #[arg(long, value_name = "BITS", default_value = "0", global = true)]
    pub msk4: u32,

    /// IPv6 netmask prefix width (0 = exact address)
    #[arg(long, value_name = "BITS", default_value = "0", global = true)]
    pub msk6: u32,

    /// Match spec file (TOML); command-line criteria override its fields
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for logs
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Compact format
    Compact,
}
