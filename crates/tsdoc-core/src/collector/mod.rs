//! Declaration collector.
//!
//! Both phases walk the same top-level statements of a file:
//! - Prepare creates named skeletons (classes, interfaces, enums, type
//!   aliases) so every name a later lookup may target exists project-wide.
//! - Visit resolves types and fills the skeletons in, and records functions
//!   and constants.
//!
//! Namespace blocks are walked recursively with the current module swapped
//! for the namespace module.

mod class;
mod prepare;
mod visit;

use crate::error::{ExtractError, Result};
use crate::location;
use crate::model::{Module, ModuleId};
use crate::module_tree::ModuleTree;
use crate::resolver::{Scope, TypeResolver};
use tracing::{debug, trace};
use tsdoc_syntax::{FileId, NodeIndex, NodeList, SourceFile, SyntaxKind, node_flags};

/// Maximum number of characters of an initializer kept in a constant's content.
pub const MAX_CONTENT_LENGTH: usize = 256;
pub const TRUNCATION_MARKER: &str = "...";

/// Keep at most [`MAX_CONTENT_LENGTH`] characters, marking the cut.
pub fn truncate_content(text: &str) -> String {
    match text.char_indices().nth(MAX_CONTENT_LENGTH) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Prepare,
    Visit,
}

pub(crate) struct Collector<'a, 't> {
    resolver: &'t TypeResolver<'a>,
    tree: &'t mut ModuleTree,
    file: FileId,
    source: &'a SourceFile,
    module: ModuleId,
}

impl<'a, 't> Collector<'a, 't> {
    pub(crate) fn new(
        resolver: &'t TypeResolver<'a>,
        tree: &'t mut ModuleTree,
        file: FileId,
        source: &'a SourceFile,
        module: ModuleId,
    ) -> Self {
        Collector {
            resolver,
            tree,
            file,
            source,
            module,
        }
    }

    fn scope(&self) -> Scope<'a> {
        Scope::for_module(self.file, self.source, &self.tree[self.module])
    }

    fn module(&mut self) -> &mut Module {
        &mut self.tree[self.module]
    }

    fn missing(&self, kind: &'static str, name: &str) -> ExtractError {
        let module = &self.tree[self.module];
        let module_name = if module.path.is_empty() {
            module.name.clone()
        } else {
            module.path.join("/")
        };
        ExtractError::missing(kind, name, module_name)
    }

    /// Name of a declaration; anonymous default exports are called `default`.
    fn declaration_name(&self, name: NodeIndex) -> String {
        let text = self
            .source
            .arena
            .identifier_text(name)
            .unwrap_or_else(|| self.source.node_text(name));
        if text.is_empty() {
            "default".to_string()
        } else {
            text.to_string()
        }
    }

    // ============================================================================
    // Statement walking
    // ============================================================================

    pub(crate) fn walk_statements(&mut self, statements: &'a NodeList, phase: Phase) -> Result<()> {
        let source = self.source;
        for stmt in statements.iter() {
            let Some(node) = source.arena.get(stmt) else {
                continue;
            };
            if node.kind == SyntaxKind::ModuleDeclaration {
                self.walk_namespace(stmt, phase)?;
                continue;
            }
            match phase {
                Phase::Prepare => self.prepare_statement(stmt, node)?,
                Phase::Visit => self.visit_statement(stmt, node)?,
            }
        }
        Ok(())
    }

    fn walk_namespace(&mut self, idx: NodeIndex, phase: Phase) -> Result<()> {
        let source = self.source;
        let arena = &source.arena;
        let Some(node) = arena.get(idx) else {
            return Ok(());
        };
        let Some(data) = arena.get_module(node) else {
            return Ok(());
        };
        if node.has_flag(node_flags::GLOBAL_AUGMENTATION) {
            trace!(file = %source.file_name, "skipping global augmentation");
            return Ok(());
        }
        // `declare module "x"` has a string literal name
        let Some(name) = arena
            .get(data.name)
            .and_then(|name| arena.get_identifier(name))
            .map(|ident| ident.text.as_str())
        else {
            debug!(file = %source.file_name, "skipping ambient module declaration");
            return Ok(());
        };

        let parent = &self.tree[self.module];
        let repository = if parent.is_namespace {
            parent.repository.clone()
        } else {
            location::file_locator(parent.repository.as_deref(), source.base_name())
        };
        let namespace = self.tree.enter_namespace(self.module, name, repository);

        let saved = std::mem::replace(&mut self.module, namespace);
        let result = match arena.kind(data.body) {
            Some(SyntaxKind::ModuleDeclaration) => self.walk_namespace(data.body, phase),
            Some(SyntaxKind::ModuleBlock) => match arena
                .get(data.body)
                .and_then(|body| arena.get_module_block(body))
            {
                Some(block) => self.walk_statements(&block.statements, phase),
                None => Ok(()),
            },
            _ => Ok(()),
        };
        self.module = saved;
        result
    }
}

#[cfg(test)]
#[path = "../tests/collector_tests.rs"]
mod collector_tests;
