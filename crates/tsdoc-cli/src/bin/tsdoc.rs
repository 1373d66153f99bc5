use anyhow::{Context, Result};
use clap::Parser;

use tsdoc_cli::args::CliArgs;
use tsdoc_cli::{driver, tracing_config};

fn main() -> Result<()> {
    // No-op unless TSDOC_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    driver::run(&args, &cwd)?;
    Ok(())
}
