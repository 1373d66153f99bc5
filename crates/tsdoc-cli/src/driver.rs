//! Load the project config and program snapshot, extract, and write the result.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tsdoc_core::{Documentation, ExtractConfig, ProjectConfig};
use tsdoc_syntax::Program;

use crate::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "tsdoc.json";

/// What a run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub declarations: usize,
    /// File written, or `None` when the JSON went to stdout
    pub output: Option<PathBuf>,
}

pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunOutcome> {
    let config_path = resolve_config_path(cwd, args.config.as_deref())?;
    let config = load_config(config_path.as_deref(), cwd)?;
    let config = apply_overrides(config, args, cwd);
    debug!(
        name = %config.name,
        base_dir = %config.base_dir.display(),
        repository = ?config.repository,
        "resolved extraction config"
    );

    let program_path = absolute(cwd, &args.program);
    let program = load_program(&program_path)?;
    let docs = document(&program, &config)?;
    let declarations = docs.module().declaration_count();

    let json = docs
        .to_json_string(args.pretty)
        .context("failed to serialize documentation")?;
    let output = args.out.as_deref().map(|out| absolute(cwd, out));
    write_output(output.as_deref(), &json)?;

    info!(declarations, output = ?output, "documentation written");
    Ok(RunOutcome {
        declarations,
        output,
    })
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Explicit `--config` (file or directory), else `tsdoc.json` in `cwd` if present.
pub fn resolve_config_path(cwd: &Path, config: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(config) = config else {
        let candidate = cwd.join(CONFIG_FILE_NAME);
        return Ok(candidate.is_file().then_some(candidate));
    };

    let mut candidate = absolute(cwd, config);
    if candidate.is_dir() {
        candidate = candidate.join(CONFIG_FILE_NAME);
    }

    if !candidate.exists() {
        bail!("config not found at {}", candidate.display());
    }

    if !candidate.is_file() {
        bail!("config path is not a file: {}", candidate.display());
    }

    Ok(Some(candidate))
}

/// Project config relative to its own directory; defaults rooted at `cwd`
/// when there is no config file.
pub fn load_config(path: Option<&Path>, cwd: &Path) -> Result<ExtractConfig> {
    let Some(path) = path else {
        return ProjectConfig::default()
            .into_extract_config(cwd)
            .context("failed to build default config");
    };

    let config_dir = path.parent().unwrap_or(cwd);
    ProjectConfig::load(path)?
        .into_extract_config(config_dir)
        .with_context(|| format!("failed to load {}", path.display()))
}

pub fn apply_overrides(mut config: ExtractConfig, args: &CliArgs, cwd: &Path) -> ExtractConfig {
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    if let Some(base_dir) = &args.base_dir {
        config.base_dir = absolute(cwd, base_dir);
    }
    if let Some(repository) = &args.repository {
        config = config.with_repository(repository.as_str());
    }
    config
}

pub fn load_program(path: &Path) -> Result<Program> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Program::from_json(&source)
        .with_context(|| format!("failed to parse program snapshot {}", path.display()))
}

/// Run both extraction phases over every file of the snapshot.
pub fn document(program: &Program, config: &ExtractConfig) -> Result<Documentation> {
    let _span = tracing::info_span!("document", files = program.files().len()).entered();
    tsdoc_core::extract(program, config).context("extraction failed")
}

fn write_output(path: Option<&Path>, json: &str) -> Result<()> {
    let Some(path) = path else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}").context("failed to write to stdout")?;
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod driver_tests;
