//! xtask - Development task runner for columnar-bench
//!
//! Usage:
//!   cargo run -p xtask -- profile --strategy <name> [--tool perf|callgrind] [options]

mod profile;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for columnar-bench")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one strategy's benchmark under an external profiler
    Profile(profile::ProfileArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Profile(args) => profile::run(args),
    }
}
