//! Error types for extraction and configuration.

use std::path::PathBuf;
use thiserror::Error;
use tsdoc_syntax::FileId;

/// Errors raised while collecting declarations.
///
/// Unsupported syntax and unresolvable symbols never produce an error; they
/// degrade to stringified types and references instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The visit phase looked up a skeleton the prepare phase never created.
    #[error("no {kind} named `{name}` was prepared in module `{module}`")]
    MissingDeclaration {
        kind: &'static str,
        name: String,
        module: String,
    },

    /// The checker has no source file with this id.
    #[error("unknown source file {0:?}")]
    UnknownFile(FileId),
}

impl ExtractError {
    pub fn missing(kind: &'static str, name: impl Into<String>, module: impl Into<String>) -> Self {
        Self::MissingDeclaration {
            kind,
            name: name.into(),
            module: module.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors raised while loading a project configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: json5::Error,
    },
}
