//! Program: a serializable frontend snapshot implementing [`TypeChecker`].
//!
//! A frontend records each file's syntax, the symbol table, and per-node
//! checker answers (symbol bindings, inferred signatures). The snapshot can be
//! dumped to JSON by any tool and loaded by the `tsdoc` CLI, and it doubles as
//! the checker used by tests.

use crate::base::{FileId, NodeIndex};
use crate::checker::{InferredSignature, TypeChecker};
use crate::source_file::SourceFile;
use crate::symbols::{Symbol, SymbolId, SymbolTable};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Checker answers for one file, keyed by node index.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct FileBindings {
    #[serde(default)]
    node_symbols: FxHashMap<u32, SymbolId>,
    #[serde(default)]
    signatures: FxHashMap<u32, InferredSignature>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Program {
    files: Vec<SourceFile>,
    #[serde(default)]
    symbols: SymbolTable,
    #[serde(default)]
    bindings: Vec<FileBindings>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Program> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn add_file(&mut self, file: SourceFile) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(file);
        self.bindings.push(FileBindings::default());
        id
    }

    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    pub fn file_mut(&mut self, id: FileId) -> Option<&mut SourceFile> {
        self.files.get_mut(id.index())
    }

    pub fn file_ids(&self) -> Vec<FileId> {
        (0..self.files.len() as u32).map(FileId).collect()
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn add_symbol(&mut self, symbol: Symbol) -> SymbolId {
        self.symbols.alloc(symbol)
    }

    fn bindings_mut(&mut self, file: FileId) -> &mut FileBindings {
        if self.bindings.len() <= file.index() {
            self.bindings
                .resize_with(file.index() + 1, FileBindings::default);
        }
        &mut self.bindings[file.index()]
    }

    /// Record that `node` in `file` refers to (or declares) `symbol`.
    pub fn bind(&mut self, file: FileId, node: NodeIndex, symbol: SymbolId) {
        if node.is_some() {
            self.bindings_mut(file).node_symbols.insert(node.0, symbol);
        }
    }

    pub fn set_signature(&mut self, file: FileId, node: NodeIndex, signature: InferredSignature) {
        if node.is_some() {
            self.bindings_mut(file).signatures.insert(node.0, signature);
        }
    }
}

impl TypeChecker for Program {
    fn source_file(&self, file: FileId) -> Option<&SourceFile> {
        self.file(file)
    }

    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    fn symbol_at_location(&self, file: FileId, node: NodeIndex) -> Option<SymbolId> {
        if node.is_none() {
            return None;
        }
        self.bindings
            .get(file.index())?
            .node_symbols
            .get(&node.0)
            .copied()
    }

    fn inferred_signature(&self, file: FileId, node: NodeIndex) -> Option<&InferredSignature> {
        if node.is_none() {
            return None;
        }
        self.bindings.get(file.index())?.signatures.get(&node.0)
    }

    fn symbols_named(&self, name: &str) -> Vec<SymbolId> {
        self.symbols.named(name)
    }
}

#[cfg(test)]
#[path = "tests/program_tests.rs"]
mod program_tests;
