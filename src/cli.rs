use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dircomparer",
    version,
    about = "Compares that no files are missing or incomplete, only checks for size, no hashing",
    long_about = None
)]
pub struct Args {
    /// Original directory (the copy source)
    #[arg(value_name = "ORIG_DIR", value_hint = ValueHint::DirPath)]
    pub orig_dir: PathBuf,

    /// Destination directory (the possibly incomplete copy)
    #[arg(value_name = "DEST_DIR", value_hint = ValueHint::DirPath)]
    pub dest_dir: PathBuf,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if either directory cannot be walked or sized.
pub fn run() -> Result<()> {
    crate::logging::init();
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
