//! Profiler runner
//!
//! This module provides the `profile` subcommand: it builds the criterion
//! benchmark, then runs one strategy under `perf record` or callgrind in
//! criterion's `--profile-time` mode, so samples land only in that strategy's
//! sampling region.

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use columnar_bench::strategy::StrategyKind;
use columnar_bench::sweep::SizeRange;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const BENCH_NAME: &str = "construction_bench";

/// Arguments for the profile subcommand
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Strategy to profile (bulk_append, bulk_indexed, bulk_indexed_unrolled,
    /// dynamic_array, raw_block_unrolled)
    #[arg(long, short = 's')]
    pub strategy: StrategyKind,

    /// External profiler
    #[arg(long, short = 't', value_enum, default_value_t = Tool::Perf)]
    pub tool: Tool,

    /// Only profile this size (must be a point of the sweep)
    #[arg(long)]
    pub size: Option<usize>,

    /// Seconds criterion spends iterating each benchmark
    #[arg(long, default_value_t = 10)]
    pub profile_time: u64,

    /// Output directory (default: target/profiles/<strategy>)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Log sampling region timings from the benchmark
    #[arg(long)]
    pub verbose: bool,
}

/// Supported external profilers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tool {
    /// Linux perf sampling profiler
    Perf,
    /// Valgrind callgrind instruction-level profiler
    Callgrind,
}

impl Tool {
    const fn program(self) -> &'static str {
        match self {
            Self::Perf => "perf",
            Self::Callgrind => "valgrind",
        }
    }

    fn command(self, output_dir: &Path) -> Command {
        let mut cmd = Command::new(self.program());
        match self {
            Self::Perf => {
                cmd.args(["record", "--call-graph", "dwarf", "-o"])
                    .arg(output_dir.join("perf.data"))
                    .arg("--");
            }
            Self::Callgrind => {
                cmd.arg("--tool=callgrind").arg(format!(
                    "--callgrind-out-file={}",
                    output_dir.join("callgrind.out.%p").display()
                ));
            }
        }
        cmd
    }
}

/// One line of `cargo --message-format=json` output
#[derive(Debug, Deserialize)]
struct CargoMessage {
    reason: String,
    target: Option<CargoTarget>,
    executable: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct CargoTarget {
    name: String,
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    // xtask is in project_root/xtask, so go up one level
    if manifest_dir.ends_with("xtask") {
        return manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask manifest directory has no parent");
    }

    Ok(manifest_dir)
}

/// Check that the profiler binary is on PATH
fn check_tool(tool: Tool) -> Result<()> {
    let found = Command::new(tool.program())
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);

    if !found {
        bail!("`{}` not found on PATH", tool.program());
    }
    Ok(())
}

/// Build the benchmark binary and return its path
fn build_bench(root: &Path) -> Result<PathBuf> {
    eprintln!("Building {BENCH_NAME}...");

    let mut child = Command::new(env::var("CARGO").unwrap_or_else(|_| "cargo".to_string()))
        .current_dir(root)
        .args(["bench", "--bench", BENCH_NAME, "--no-run", "--message-format=json"])
        .stdout(Stdio::piped())
        .spawn()
        .context("Failed to run cargo bench --no-run")?;

    let stdout = child.stdout.take().context("cargo stdout not captured")?;
    let mut executable = None;
    for line in BufReader::new(stdout).lines() {
        let line = line.context("Failed to read cargo output")?;
        let Ok(message) = serde_json::from_str::<CargoMessage>(&line) else {
            continue;
        };
        let is_bench = message.reason == "compiler-artifact"
            && message
                .target
                .as_ref()
                .is_some_and(|target| target.name == BENCH_NAME);
        if is_bench && message.executable.is_some() {
            executable = message.executable;
        }
    }

    let status = child.wait().context("Failed to wait for cargo")?;
    if !status.success() {
        bail!("Building {BENCH_NAME} failed");
    }

    executable.with_context(|| format!("cargo did not report an executable for {BENCH_NAME}"))
}

/// Criterion filter selecting one strategy, optionally one size
fn bench_filter(strategy: StrategyKind, size: Option<usize>) -> String {
    match size {
        Some(size) => format!("^{strategy}/{size}$"),
        None => format!("^{strategy}/"),
    }
}

/// Main entry point for profile command
pub fn run(args: ProfileArgs) -> Result<()> {
    let root = project_root()?;

    if let Some(size) = args.size
        && !SizeRange::default().sizes().contains(&size)
    {
        bail!(
            "size {size} is not part of the sweep {:?}",
            SizeRange::default().sizes()
        );
    }

    check_tool(args.tool)?;

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| root.join("target/profiles").join(args.strategy.name()));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let executable = build_bench(&root)?;
    let filter = bench_filter(args.strategy, args.size);

    eprintln!("==============================================");
    eprintln!("  Profile Runner (xtask)");
    eprintln!("==============================================");
    eprintln!();
    eprintln!("Configuration:");
    eprintln!("  Strategy:     {}", args.strategy);
    eprintln!("  Tool:         {}", args.tool.program());
    eprintln!("  Filter:       {filter}");
    eprintln!("  Profile Time: {}s", args.profile_time);
    eprintln!("  Output:       {}", output_dir.display());
    eprintln!();

    let mut cmd = args.tool.command(&output_dir);
    cmd.current_dir(&root)
        .arg(&executable)
        .args(["--bench", "--profile-time"])
        .arg(args.profile_time.to_string())
        .arg(&filter);
    if args.verbose {
        cmd.env("RUST_LOG", "columnar_bench=debug");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run {}", args.tool.program()))?;
    if !status.success() {
        bail!("{} exited with {status}", args.tool.program());
    }

    eprintln!();
    eprintln!("==============================================");
    eprintln!("  Profile Complete");
    eprintln!("==============================================");
    eprintln!();
    eprintln!("  Results: {}", output_dir.display());
    eprintln!();

    Ok(())
}
