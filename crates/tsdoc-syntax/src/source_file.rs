//! Source files: text, syntax arena, top-level statements and attached JSDoc.

use crate::arena::NodeArena;
use crate::base::{NodeIndex, NodeList};
use crate::jsdoc::JsDoc;
use crate::position::{LineMap, Position};
use once_cell::unsync::OnceCell;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the file as the frontend saw it (absolute or project-relative)
    pub file_name: String,
    pub text: String,
    pub arena: NodeArena,
    /// Top-level statements in source order
    pub statements: NodeList,
    /// Documentation blocks keyed by the node they are attached to
    #[serde(default)]
    jsdoc: FxHashMap<u32, Vec<JsDoc>>,
    #[serde(skip)]
    line_map: OnceCell<LineMap>,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> SourceFile {
        SourceFile {
            file_name: file_name.into(),
            text: text.into(),
            arena: NodeArena::new(),
            statements: NodeList::default(),
            jsdoc: FxHashMap::default(),
            line_map: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.file_name)
    }

    /// Base name of the file (`circle.ts` for `src/shapes/circle.ts`).
    pub fn base_name(&self) -> &str {
        self.path()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file_name)
    }

    pub fn push_statement(&mut self, stmt: NodeIndex) {
        self.statements.nodes.push(stmt);
    }

    /// Raw source text of a node; empty for synthetic or out-of-range nodes.
    pub fn node_text(&self, idx: NodeIndex) -> &str {
        let Some(node) = self.arena.get(idx) else {
            return "";
        };
        if node.is_synthetic() {
            return "";
        }
        self.text
            .get(node.pos as usize..node.end as usize)
            .unwrap_or("")
    }

    pub fn line_map(&self) -> &LineMap {
        self.line_map.get_or_init(|| LineMap::build(&self.text))
    }

    /// Zero-based position of a node's start; `None` for synthetic nodes.
    pub fn node_position(&self, idx: NodeIndex) -> Option<Position> {
        let node = self.arena.get(idx)?;
        if node.is_synthetic() {
            return None;
        }
        Some(self.line_map().offset_to_position(node.pos, &self.text))
    }

    // ============================================================================
    // JSDoc
    // ============================================================================

    pub fn attach_jsdoc(&mut self, idx: NodeIndex, doc: JsDoc) {
        if idx.is_some() {
            self.jsdoc.entry(idx.0).or_default().push(doc);
        }
    }

    /// Documentation blocks attached to `idx`, in source order.
    pub fn jsdoc(&self, idx: NodeIndex) -> &[JsDoc] {
        self.jsdoc.get(&idx.0).map(Vec::as_slice).unwrap_or(&[])
    }
}
