//! Prints the overrides TLC can load in the current environment.
//!
//! Names go to stdout one per line (or as a JSON report with `--json`);
//! notices about missing libraries go to stderr through `tracing`. A degraded
//! result still exits 0. Only probe faults exit non-zero.

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tlc_overrides::{CapabilityRegistry, Config, DiscoveryReport, PathProbe};
use tracing_subscriber::EnvFilter;

/// List the TLC module overrides whose dependencies resolve.
#[derive(Parser)]
#[command(name = "list-overrides")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Extra resolution-path entry (file, directory, or `dir/*`); searched
    /// before TLC_OVERRIDES_PATH and CLASSPATH
    #[arg(long = "lib-path", value_name = "PATH")]
    lib_paths: Vec<PathBuf>,

    /// Print a JSON discovery report instead of plain names
    #[arg(long)]
    json: bool,

    /// Print every known override without probing
    #[arg(long, conflicts_with = "json")]
    all: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_sources(cli.lib_paths);
    let registry = CapabilityRegistry::new(PathProbe::from_config(&config));

    if cli.all {
        print_names(registry.known().names());
        return Ok(());
    }

    let discovery = registry.discover()?;
    if cli.json {
        let value = DiscoveryReport::from_discovery(&discovery).to_validated_value()?;
        println!("{}", serde_json::to_string(&value)?);
    } else {
        print_names(discovery.capabilities().names());
    }
    Ok(())
}

fn print_names(names: Vec<&str>) {
    for name in names {
        println!("{name}");
    }
}
