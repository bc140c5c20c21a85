//! EliMAC CLI
//!
//! Message authentication demo and benchmark command-line tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run_mode, suite_mode, RunArgs, SuiteArgs};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "elimac")]
#[command(about = "Fast message authentication from reduced-round AES", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments for the default run mode (if no subcommand)
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate one message and report the tag with timing
    Run(RunArgs),
    /// Sweep message lengths and tag sizes, reporting one row per configuration
    Suite(SuiteArgs),
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run(args)) => run_mode(&args)?,
        Some(Commands::Suite(args)) => suite_mode(&args)?,
        None => run_mode(&cli.run)?,
    }

    Ok(())
}
