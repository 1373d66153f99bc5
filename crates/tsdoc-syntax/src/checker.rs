//! The checker contract consumed by the extractor.

use crate::base::{FileId, NodeIndex};
use crate::jsdoc::JsDoc;
use crate::source_file::SourceFile;
use crate::symbols::{Symbol, SymbolId};
use serde::{Deserialize, Serialize};

/// A type the checker inferred, reduced to what documentation needs: the
/// symbol naming it (if any) and its type arguments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InferredType {
    /// Checker's printed form, used for diagnostics only
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub symbol: Option<SymbolId>,
    #[serde(default)]
    pub type_arguments: Vec<InferredType>,
}

impl InferredType {
    pub fn named(text: impl Into<String>, symbol: SymbolId) -> Self {
        InferredType {
            text: text.into(),
            symbol: Some(symbol),
            type_arguments: Vec::new(),
        }
    }

    /// An inferred type with no symbol (primitives, anonymous object types).
    pub fn anonymous(text: impl Into<String>) -> Self {
        InferredType {
            text: text.into(),
            symbol: None,
            type_arguments: Vec::new(),
        }
    }

    pub fn with_arguments(mut self, args: Vec<InferredType>) -> Self {
        self.type_arguments = args;
        self
    }
}

/// Signature the checker inferred for a function-like declaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InferredSignature {
    #[serde(default)]
    pub return_type: Option<InferredType>,
}

/// Type-checking service supplied by the frontend.
///
/// Node arguments are always relative to the given file's arena.
pub trait TypeChecker {
    fn source_file(&self, file: FileId) -> Option<&SourceFile>;

    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    /// Symbol referenced or declared at `node` (identifier, qualified name,
    /// property access, `this` type, ...).
    fn symbol_at_location(&self, file: FileId, node: NodeIndex) -> Option<SymbolId>;

    /// Signature inferred for a function-like declaration.
    fn inferred_signature(&self, file: FileId, node: NodeIndex) -> Option<&InferredSignature>;

    /// Documentation blocks attached to `node`.
    fn documentation(&self, file: FileId, node: NodeIndex) -> &[JsDoc] {
        self.source_file(file)
            .map(|sf| sf.jsdoc(node))
            .unwrap_or(&[])
    }

    /// Every symbol with the given name.
    fn symbols_named(&self, name: &str) -> Vec<SymbolId>;
}
