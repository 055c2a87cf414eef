use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueHint};

pub mod run_impl;

/// Report written in the current working directory.
pub const OUTPUT_FILE: &str = "results.txt";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "data-processor",
    version,
    about = "Summarise a CSV file of numeric rows into results.txt",
    long_about = None
)]
pub struct Args {
    /// CSV file with at least three numeric values per row
    #[arg(
        value_name = "INPUT_FILE",
        value_hint = ValueHint::FilePath,
        allow_hyphen_values = true
    )]
    pub input: PathBuf,
}

/// Runs the pipeline for parsed arguments, writing [`OUTPUT_FILE`].
///
/// # Errors
/// Returns an error if the input cannot be read or aggregated, or the
/// report cannot be written.
pub fn run(args: &Args) -> Result<PathBuf> {
    let output = Path::new(OUTPUT_FILE);
    run_impl::process(&args.input, output)?;
    Ok(output.to_path_buf())
}
