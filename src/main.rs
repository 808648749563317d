//! NDIFF command-line interface.
//!
//! Takes a before-file and an after-file and prints the before-file with
//! every number replaced by `before - after`.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use ndiff_rs::diff_files;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// NDIFF - Numeric diff for column-aligned text
///
/// Compares the numbers found at the same positions in two files and prints
/// the first file with each number replaced by the difference, keeping the
/// columns aligned.
#[derive(Parser)]
#[command(name = "ndiff-rs")]
#[command(version)]
#[command(about = "Numeric diff for column-aligned text", long_about = None)]
struct Cli {
    /// Baseline file (values are subtracted from)
    #[arg(value_name = "BEFORE")]
    before: PathBuf,

    /// File whose values are subtracted
    #[arg(value_name = "AFTER")]
    after: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        process::exit(2);
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    diff_files(&cli.before, &cli.after, &mut out).with_context(|| {
        format!(
            "Failed to diff {} against {}",
            cli.before.display(),
            cli.after.display()
        )
    })?;

    out.flush().context("Failed to flush output")?;
    Ok(())
}
