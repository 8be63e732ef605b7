//! flashkey command-line entry point

use anyhow::Result;
use clap::Parser;
use flashkey_cli::commands::Commands;

/// Extract and replace keywords from large dictionaries in a single pass
#[derive(Debug, Parser)]
#[command(name = "flashkey", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
