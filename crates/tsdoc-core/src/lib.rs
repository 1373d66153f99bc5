//! tsdoc extraction engine.
//!
//! Turns the syntax and checker answers of a TypeScript project into a
//! serializable documentation model: a tree of modules holding classes,
//! interfaces, enums, type aliases, functions and constants with resolved
//! types, cross-references, source locations and JSDoc.
//!
//! The pipeline:
//! - [`module_tree`] files every declaration under a directory or namespace module
//! - [`collector`] runs the prepare phase (skeletons) and the visit phase (fill-in)
//! - [`resolver`] maps type syntax to the closed [`Type`] model
//! - [`reference`] places symbols in the module tree
//! - [`serializer`] emits the finished tree as array-only JSON
//!
//! [`Extractor`] drives the two phases; [`extract`] runs them over a whole
//! [`tsdoc_syntax::Program`].

pub mod config;
pub use config::{DEFAULT_API_NAMES, ExtractConfig, ProjectConfig};

pub mod error;
pub use error::{ConfigError, ExtractError, Result};

pub mod model;
pub use model::*;

pub mod module_tree;
pub use module_tree::ModuleTree;

pub mod reference;
pub use reference::{DeclarationIndex, ReferenceIndex, ResolveContext, SymbolTarget};

pub mod location;

pub mod resolver;
pub use resolver::{Scope, TypeResolver};

mod jsdoc;

pub mod collector;
pub use collector::{MAX_CONTENT_LENGTH, TRUNCATION_MARKER, truncate_content};

pub mod serializer;
pub use serializer::{Documentation, SerializedModule, serialize_module};

pub mod extractor;
pub use extractor::{Extractor, Preparing, Visiting, extract, extract_files};
