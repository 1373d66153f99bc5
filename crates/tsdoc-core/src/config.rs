//! Extraction settings and the `tsdoc.json` project file.
//!
//! `ProjectConfig` is the on-disk form (JSON5, so comments and trailing commas
//! are accepted). `ExtractConfig` is what the extractor consumes: relative
//! paths are resolved and the readme has been read.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Builtin global names documented by the platform rather than the project.
/// A type reference to one of these that the checker cannot resolve becomes a
/// default-API reference.
pub const DEFAULT_API_NAMES: &[&str] = &[
    "Array",
    "ArrayBuffer",
    "ArrayLike",
    "AsyncIterable",
    "AsyncIterator",
    "Awaited",
    "Boolean",
    "DataView",
    "Date",
    "Error",
    "Exclude",
    "Extract",
    "Float32Array",
    "Float64Array",
    "Function",
    "Generator",
    "InstanceType",
    "Int32Array",
    "Iterable",
    "IterableIterator",
    "Iterator",
    "Map",
    "NonNullable",
    "Number",
    "Object",
    "Omit",
    "Parameters",
    "Partial",
    "Pick",
    "Promise",
    "PromiseLike",
    "Readonly",
    "ReadonlyArray",
    "ReadonlyMap",
    "ReadonlySet",
    "Record",
    "RegExp",
    "Required",
    "ReturnType",
    "Set",
    "String",
    "Symbol",
    "Uint8Array",
    "WeakMap",
    "WeakSet",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Project name, used as the root module's name
    pub name: String,
    /// Directory module paths are derived from
    pub base_dir: PathBuf,
    /// Base URL source locators are built from; locators are omitted without it
    pub repository: Option<String>,
    pub homepage: Option<String>,
    /// Readme content (not a path)
    pub readme: Option<String>,
    pub version: Option<String>,
    pub default_api_names: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            name: "index".to_string(),
            base_dir: PathBuf::new(),
            repository: None,
            homepage: None,
            readme: None,
            version: None,
            default_api_names: DEFAULT_API_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExtractConfig {
    pub fn new(name: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        ExtractConfig {
            name: name.into(),
            base_dir: base_dir.into(),
            ..ExtractConfig::default()
        }
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into().trim_end_matches('/').to_string());
        self
    }
}

// ============================================================================
// Project file
// ============================================================================

/// Contents of a `tsdoc.json` file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Relative to the config file
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    /// Path of the readme, relative to the config file
    #[serde(default)]
    pub readme: Option<PathBuf>,
    #[serde(default)]
    pub version: Option<String>,
    /// Replaces the builtin default-API name list when present
    #[serde(default)]
    pub default_api_names: Option<Vec<String>>,
}

impl ProjectConfig {
    pub fn parse(source: &str, path: &Path) -> Result<ProjectConfig, ConfigError> {
        json5::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<ProjectConfig, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source, path)
    }

    /// Resolve paths against `config_dir` and read the readme.
    pub fn into_extract_config(self, config_dir: &Path) -> Result<ExtractConfig, ConfigError> {
        let defaults = ExtractConfig::default();
        let base_dir = match self.base_dir {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => config_dir.join(dir),
            None => config_dir.to_path_buf(),
        };
        let readme = match self.readme {
            Some(path) => {
                let path = config_dir.join(path);
                let content = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Io { path, source })?;
                Some(content)
            }
            None => None,
        };

        Ok(ExtractConfig {
            name: self.name.unwrap_or(defaults.name),
            base_dir,
            repository: self
                .repository
                .map(|repo| repo.trim_end_matches('/').to_string()),
            homepage: self.homepage,
            readme,
            version: self.version,
            default_api_names: self
                .default_api_names
                .unwrap_or(defaults.default_api_names),
        })
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
