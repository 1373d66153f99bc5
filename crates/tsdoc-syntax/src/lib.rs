//! Frontend contract for the tsdoc extractor.
//!
//! tsdoc never parses TypeScript itself. A frontend (a compiler plugin, a
//! language-service dump, or a test fixture) describes each source file as an
//! arena of typed syntax nodes and answers checker queries through the
//! [`TypeChecker`] trait. This crate provides:
//! - Arena syntax trees (`NodeArena`, `NodeIndex`, `SyntaxKind`, typed node data)
//! - Source files with attached JSDoc blocks and line maps
//! - Symbols and `symbol_flags`
//! - The `TypeChecker` trait and `Program`, a serializable snapshot implementing it

pub mod base;
pub use base::{FileId, NodeIndex, NodeList};

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod node;
pub use node::{Node, NodeData, modifier_flags, node_flags};

pub mod arena;
pub use arena::NodeArena;

pub mod position;
pub use position::{LineMap, Position};

pub mod jsdoc;
pub use jsdoc::{JsDoc, JsDocTag};

pub mod source_file;
pub use source_file::SourceFile;

// Node construction helpers for frontends and fixtures
pub mod builder;

pub mod symbols;
pub use symbols::{Declaration, Symbol, SymbolId, SymbolTable, symbol_flags};

pub mod checker;
pub use checker::{InferredSignature, InferredType, TypeChecker};

pub mod program;
pub use program::Program;
