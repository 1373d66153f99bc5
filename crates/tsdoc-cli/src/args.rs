use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the tsdoc binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsdoc",
    version,
    about = "Extract API documentation from a checked TypeScript project"
)]
pub struct CliArgs {
    /// Frontend snapshot (JSON) holding the parsed files, symbols and bindings.
    #[arg(short = 'p', long)]
    pub program: PathBuf,

    /// Path to tsdoc.json or a directory containing it.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write the documentation here instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    // ==================== Config Overrides ====================
    /// Project name used for the root module.
    #[arg(long)]
    pub name: Option<String>,

    /// Directory module paths are derived from.
    #[arg(long = "baseDir", alias = "base-dir")]
    pub base_dir: Option<PathBuf>,

    /// Base URL source locators are built from.
    #[arg(long)]
    pub repository: Option<String>,
}

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
