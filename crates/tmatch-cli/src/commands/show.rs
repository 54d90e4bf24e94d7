//! Assemble-and-display command
//!
//! Builds the match configuration from the spec file and/or command-line
//! criteria and prints the validated result.

use anyhow::{Context, Result};
use colored::Colorize;
use tmatch_core::{AddrList, FilterConfig, MatchSpec, RoleFlags};

use crate::args::Args;

/// Build the effective spec: start from the config file when given, then
/// let any criteria supplied on the command line replace its fields.
pub fn effective_spec(args: &Args) -> Result<MatchSpec> {
    let mut spec = match &args.config {
        Some(path) => MatchSpec::load(path)
            .with_context(|| format!("failed to load match spec: {path}"))?,
        None => MatchSpec::default(),
    };

    if !args.host.is_empty() {
        spec.host = args.host.clone();
    }
    if !args.src.is_empty() {
        spec.src = args.src.clone();
    }
    if !args.dst.is_empty() {
        spec.dst = args.dst.clone();
    }
    if args.msk4 != 0 {
        spec.msk4 = args.msk4;
    }
    if args.msk6 != 0 {
        spec.msk6 = args.msk6;
    }

    Ok(spec)
}

/// Execute the show command
pub fn execute(args: &Args) -> Result<()> {
    let spec = effective_spec(args)?;
    let config = FilterConfig::assemble(&spec).context("invalid match criteria")?;

    println!("{}", "═".repeat(50).bright_blue());
    println!("{}", " Match Configuration".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());

    print_role("host", &config.either);
    print_role("src", &config.src);
    print_role("dst", &config.dst);

    println!("{}", "─".repeat(50).bright_black());
    println!("IPv4 mask: {}", v4_mask(&config.masks.v4).cyan());
    println!("IPv6 mask: {}", v6_mask(&config.masks.v6).cyan());
    println!("Flags:     {}", flag_names(config.flags).yellow());
    println!("{}", "═".repeat(50).bright_blue());

    Ok(())
}

fn print_role(name: &str, list: &AddrList) {
    if list.is_empty() {
        println!("{:<5} {}", name, "(unconstrained)".dimmed());
        return;
    }

    let (has_ip, has_port) = list.presence();
    let sig = match (has_ip, has_port) {
        (true, true) => "ip+port",
        (true, false) => "ip",
        (false, true) => "port",
        (false, false) => "empty",
    };

    println!("{:<5} {} entries ({})", name, list.len(), sig.green());
    for entry in list {
        println!("  {} {}", "●".green(), entry);
    }
}

fn v4_mask(mask: &[u8; 4]) -> String {
    format!("{}.{}.{}.{}", mask[0], mask[1], mask[2], mask[3])
}

fn v6_mask(mask: &[u8; 16]) -> String {
    mask.chunks(2)
        .map(|pair| format!("{:02x}{:02x}", pair[0], pair[1]))
        .collect::<Vec<_>>()
        .join(":")
}

fn flag_names(flags: RoleFlags) -> String {
    if flags.is_empty() {
        return "(none)".to_string();
    }

    let names = [
        (RoleFlags::EITHER_ADDR, "either-addr"),
        (RoleFlags::EITHER_PORT, "either-port"),
        (RoleFlags::SRC_ADDR, "src-addr"),
        (RoleFlags::SRC_PORT, "src-port"),
        (RoleFlags::DST_ADDR, "dst-addr"),
        (RoleFlags::DST_PORT, "dst-port"),
    ];

    names
        .iter()
        .filter(|(bit, _)| flags.contains(*bit))
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_spec_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("match.toml");
        std::fs::write(&path, "src = [\"10.0.0.1\"]\nmsk4 = 16\n").unwrap();

        let args = Args::parse_from([
            "tmatch",
            "-c",
            path.to_str().unwrap(),
            "--src",
            "192.168.0.1",
        ]);

        let spec = effective_spec(&args).unwrap();
        assert_eq!(spec.src, vec!["192.168.0.1"]);
        // Untouched fields keep the file's values
        assert_eq!(spec.msk4, 16);
    }

    #[test]
    fn test_mask_rendering() {
        assert_eq!(v4_mask(&[255, 255, 255, 0]), "255.255.255.0");
        let full = v6_mask(&[0xff; 16]);
        assert!(full.starts_with("ffff:ffff"));
    }

    #[test]
    fn test_flag_names() {
        assert_eq!(flag_names(RoleFlags::empty()), "(none)");
        let s = flag_names(RoleFlags::SRC_ADDR | RoleFlags::DST_PORT);
        assert_eq!(s, "src-addr dst-port");
    }
}
