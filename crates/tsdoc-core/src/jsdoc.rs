//! JSDoc extraction.

use crate::model::{JsDocData, JsDocTagData};
use crate::resolver::{Scope, TypeResolver, member_name};
use tsdoc_syntax::{JsDoc, NodeIndex, SyntaxKind};

impl TypeResolver<'_> {
    /// Every documentation block attached to `node`, in source order.
    pub fn jsdoc_blocks(&self, scope: &Scope<'_>, node: NodeIndex) -> Vec<JsDocData> {
        self.checker()
            .documentation(scope.file, node)
            .iter()
            .map(|doc| self.jsdoc_data(scope, doc))
            .collect()
    }

    /// The block closest to `node`, which is the one that documents it.
    pub fn extract_jsdoc(&self, scope: &Scope<'_>, node: NodeIndex) -> Option<JsDocData> {
        self.checker()
            .documentation(scope.file, node)
            .last()
            .map(|doc| self.jsdoc_data(scope, doc))
    }

    fn jsdoc_data(&self, scope: &Scope<'_>, doc: &JsDoc) -> JsDocData {
        let tags = (!doc.tags.is_empty()).then(|| {
            doc.tags
                .iter()
                .map(|tag| JsDocTagData {
                    name: tag.tag_name.clone(),
                    comment: tag.comment.clone(),
                    arg: tag.name.clone(),
                    ty: self.resolve_optional_type(scope, tag.type_expression),
                })
                .collect()
        });
        JsDocData {
            comment: doc.comment.clone(),
            tags,
        }
    }

    /// Comment of the `@param` tag naming `param`, looked up on the nearest
    /// documented function, method or variable statement above it.
    pub fn param_comment(&self, scope: &Scope<'_>, param: NodeIndex) -> Option<String> {
        let arena = &scope.source.arena;
        let name = member_name(scope, arena.get_parameter(arena.get(param)?)?.name);

        let mut current = arena.parent(param);
        while let Some(kind) = arena.kind(current) {
            if matches!(
                kind,
                SyntaxKind::ClassDeclaration
                    | SyntaxKind::InterfaceDeclaration
                    | SyntaxKind::ModuleDeclaration
                    | SyntaxKind::ModuleBlock
            ) {
                return None;
            }
            let documents_params = kind.is_function_like()
                || matches!(
                    kind,
                    SyntaxKind::VariableStatement
                        | SyntaxKind::VariableDeclaration
                        | SyntaxKind::PropertyDeclaration
                        | SyntaxKind::PropertySignature
                );
            if documents_params {
                let docs = self.checker().documentation(scope.file, current);
                if !docs.is_empty() {
                    return docs
                        .iter()
                        .flat_map(|doc| doc.tags.iter())
                        .find(|tag| tag.is_param_tag() && tag.name.as_deref() == Some(name.as_str()))
                        .and_then(|tag| tag.comment.clone());
                }
            }
            current = arena.parent(current);
        }
        None
    }
}

#[cfg(test)]
#[path = "tests/jsdoc_tests.rs"]
mod jsdoc_tests;
