//! Node construction helpers.
//!
//! Frontends that already know byte offsets use [`NodeArena::add`] directly.
//! These helpers locate a node's span by searching for its source snippet in
//! the file text, which keeps hand-built trees (fixtures, small adapters)
//! readable. A snippet that cannot be found yields a synthetic node.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::source_file::SourceFile;
use crate::syntax_kind::SyntaxKind;

impl SourceFile {
    /// Span of the first occurrence of `snippet`.
    pub fn locate(&self, snippet: &str) -> (u32, u32) {
        self.locate_nth(snippet, 0)
    }

    /// Span of the `n`-th (zero-based) occurrence of `snippet`.
    pub fn locate_nth(&self, snippet: &str, n: usize) -> (u32, u32) {
        if snippet.is_empty() {
            return (Node::SYNTHETIC_POS, Node::SYNTHETIC_POS);
        }
        match self.text.match_indices(snippet).nth(n) {
            Some((start, matched)) => (start as u32, (start + matched.len()) as u32),
            None => (Node::SYNTHETIC_POS, Node::SYNTHETIC_POS),
        }
    }

    /// Add a node spanning the first occurrence of `snippet`.
    pub fn node(&mut self, kind: SyntaxKind, snippet: &str, data: NodeData) -> NodeIndex {
        self.node_nth(kind, snippet, 0, data)
    }

    pub fn node_nth(
        &mut self,
        kind: SyntaxKind,
        snippet: &str,
        n: usize,
        data: NodeData,
    ) -> NodeIndex {
        let (pos, end) = self.locate_nth(snippet, n);
        self.arena.add(kind, pos, end, data)
    }

    /// Add a node without source text.
    pub fn synthetic(&mut self, kind: SyntaxKind, data: NodeData) -> NodeIndex {
        self.arena
            .add(kind, Node::SYNTHETIC_POS, Node::SYNTHETIC_POS, data)
    }

    pub fn identifier(&mut self, text: &str) -> NodeIndex {
        self.identifier_nth(text, 0)
    }

    pub fn identifier_nth(&mut self, text: &str, n: usize) -> NodeIndex {
        self.node_nth(
            SyntaxKind::Identifier,
            text,
            n,
            NodeData::Identifier(IdentifierData {
                text: text.to_string(),
            }),
        )
    }

    /// Keyword node (type keyword, `this`, `true`, ...) located by its text.
    pub fn keyword(&mut self, kind: SyntaxKind, snippet: &str) -> NodeIndex {
        self.node(kind, snippet, NodeData::None)
    }

    /// Modifier list made of synthetic keyword nodes.
    pub fn modifiers(&mut self, kinds: &[SyntaxKind]) -> Option<NodeList> {
        if kinds.is_empty() {
            return None;
        }
        let nodes = kinds
            .iter()
            .map(|&kind| self.synthetic(kind, NodeData::None))
            .collect();
        Some(NodeList::new(nodes))
    }

    pub fn numeric_literal(&mut self, snippet: &str) -> NodeIndex {
        self.node(
            SyntaxKind::NumericLiteral,
            snippet,
            NodeData::Literal(LiteralData {
                text: snippet.to_string(),
            }),
        )
    }

    /// String literal located by its quoted snippet; stores the unquoted value.
    pub fn string_literal(&mut self, snippet: &str) -> NodeIndex {
        let value = snippet
            .strip_prefix(['"', '\'', '`'])
            .and_then(|s| s.strip_suffix(['"', '\'', '`']))
            .unwrap_or(snippet)
            .to_string();
        self.node(
            SyntaxKind::StringLiteral,
            snippet,
            NodeData::Literal(LiteralData { text: value }),
        )
    }

    /// Type reference to a plain identifier with no type arguments.
    pub fn simple_type_ref(&mut self, name: &str) -> NodeIndex {
        self.simple_type_ref_nth(name, 0)
    }

    pub fn simple_type_ref_nth(&mut self, name: &str, n: usize) -> NodeIndex {
        let type_name = self.identifier_nth(name, n);
        self.node_nth(
            SyntaxKind::TypeReference,
            name,
            n,
            NodeData::TypeRef(TypeRefData {
                type_name,
                type_arguments: None,
            }),
        )
    }

    /// Parameter `name` with an optional type annotation, spanning `snippet`.
    pub fn parameter(&mut self, snippet: &str, name: &str, type_annotation: NodeIndex) -> NodeIndex {
        let name = self.identifier(name);
        self.node(
            SyntaxKind::Parameter,
            snippet,
            NodeData::Parameter(ParameterData {
                name,
                type_annotation,
                ..ParameterData::default()
            }),
        )
    }

    /// Type parameter without constraint or default.
    pub fn type_parameter(&mut self, name: &str) -> NodeIndex {
        let name_idx = self.identifier(name);
        self.node(
            SyntaxKind::TypeParameter,
            name,
            NodeData::TypeParameter(TypeParameterData {
                name: name_idx,
                ..TypeParameterData::default()
            }),
        )
    }
}
