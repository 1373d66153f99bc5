//! Visit phase: resolve types and fill skeletons in.

use super::{Collector, truncate_content};
use crate::error::Result;
use crate::location;
use crate::model::{ConstantDecl, FunctionDecl, TypeReference};
use crate::resolver::Scope;
use tracing::{debug, trace};
use tsdoc_syntax::{Node, NodeIndex, NodeList, SyntaxKind, modifier_flags};

impl Collector<'_, '_> {
    pub(super) fn visit_statement(&mut self, idx: NodeIndex, node: &Node) -> Result<()> {
        match node.kind {
            SyntaxKind::TypeAliasDeclaration => self.visit_type_alias(node),
            SyntaxKind::FunctionDeclaration => {
                self.visit_function(idx, node);
                Ok(())
            }
            SyntaxKind::VariableStatement => {
                self.visit_variable_statement(idx, node);
                Ok(())
            }
            SyntaxKind::ClassDeclaration => self.visit_class(node),
            SyntaxKind::InterfaceDeclaration => self.visit_interface(node),
            SyntaxKind::EnumDeclaration => self.visit_enum(node),
            kind => {
                trace!(?kind, "statement has no documentation counterpart");
                Ok(())
            }
        }
    }

    fn visit_type_alias(&mut self, node: &Node) -> Result<()> {
        let source = self.source;
        let Some(alias) = source.arena.get_type_alias(node) else {
            return Ok(());
        };
        let name = self.declaration_name(alias.name);
        if !self.module().types.contains_key(&name) {
            return Err(self.missing("type", &name));
        }

        let scope = self.scope();
        let type_parameters = self
            .resolver
            .resolve_type_parameters(&scope, alias.type_parameters.as_ref());
        let value = self.resolver.resolve_optional_type(&scope, alias.type_node);

        if let Some(decl) = self.module().types.get_mut(&name) {
            decl.type_parameters = type_parameters;
            decl.value = value;
        }
        Ok(())
    }

    /// Every declaration of a name adds a signature; the first one creates the
    /// entry and fixes its location, JSDoc and export flag.
    fn visit_function(&mut self, idx: NodeIndex, node: &Node) {
        let source = self.source;
        let arena = &source.arena;
        let Some(func) = arena.get_function(node) else {
            return;
        };
        let name = self.declaration_name(func.name);
        let scope = self.scope();
        let Some(signature) = self.resolver.resolve_signature(&scope, idx) else {
            return;
        };

        let exported = arena.has_modifier(&func.modifiers, modifier_flags::EXPORT);
        let functions = &mut self.module().functions;
        match functions.get_mut(&name) {
            Some(existing) => {
                existing.signatures.push(signature);
                debug!(function = %name, signatures = existing.signatures.len(), "merged overload");
            }
            None => {
                functions.insert(
                    name.clone(),
                    FunctionDecl {
                        name,
                        loc: signature.loc.clone(),
                        jsdoc: signature.jsdoc.clone(),
                        is_exported: exported,
                        signatures: vec![signature],
                    },
                );
            }
        }
    }

    /// Exported declarators with an initializer become constants.
    fn visit_variable_statement(&mut self, idx: NodeIndex, node: &Node) {
        let source = self.source;
        let arena = &source.arena;
        let Some(stmt) = arena.get_variable_statement(node) else {
            return;
        };
        if !arena.has_modifier(&stmt.modifiers, modifier_flags::EXPORT) {
            return;
        }

        let scope = self.scope();
        let jsdoc = self.resolver.extract_jsdoc(&scope, idx);
        let mut constants = Vec::new();
        for decl_idx in stmt.declarations.iter() {
            let Some(decl) = arena
                .get(decl_idx)
                .and_then(|decl| arena.get_variable_declaration(decl))
            else {
                continue;
            };
            if decl.initializer.is_none() {
                continue;
            }
            constants.push(ConstantDecl {
                name: self.declaration_name(decl.name),
                ty: self.resolver.resolve_optional_type(&scope, decl.type_annotation),
                content: truncate_content(source.node_text(decl.initializer)),
                loc: location::loc(&scope, decl_idx),
                jsdoc: jsdoc.clone(),
            });
        }
        self.module().constants.extend(constants);
    }

    fn visit_interface(&mut self, node: &Node) -> Result<()> {
        let source = self.source;
        let Some(interface) = source.arena.get_interface(node) else {
            return Ok(());
        };
        let name = self.declaration_name(interface.name);
        if !self.module().interfaces.contains_key(&name) {
            return Err(self.missing("interface", &name));
        }

        let scope = self.scope();
        let type_parameters = self
            .resolver
            .resolve_type_parameters(&scope, interface.type_parameters.as_ref());
        let properties = self
            .resolver
            .resolve_object_members(&scope, &interface.members);
        let (extends, _) = self.resolve_heritage_clauses(&scope, interface.heritage_clauses.as_ref());

        if let Some(decl) = self.module().interfaces.get_mut(&name) {
            if decl.type_parameters.is_empty() {
                decl.type_parameters = type_parameters;
            }
            decl.properties.extend(properties);
            decl.extends.extend(extends);
        }
        Ok(())
    }

    /// Enums are complete after the prepare phase.
    fn visit_enum(&mut self, node: &Node) -> Result<()> {
        let source = self.source;
        let Some(data) = source.arena.get_enum(node) else {
            return Ok(());
        };
        let name = self.declaration_name(data.name);
        if !self.module().enums.contains_key(&name) {
            return Err(self.missing("enum", &name));
        }
        Ok(())
    }

    /// `extends` and `implements` entries, in source order.
    pub(super) fn resolve_heritage_clauses(
        &self,
        scope: &Scope<'_>,
        clauses: Option<&NodeList>,
    ) -> (Vec<TypeReference>, Vec<TypeReference>) {
        let mut extends = Vec::new();
        let mut implements = Vec::new();
        let Some(clauses) = clauses else {
            return (extends, implements);
        };
        let arena = &self.source.arena;
        for clause in clauses.iter() {
            let Some(heritage) = arena.get(clause).and_then(|node| arena.get_heritage(node)) else {
                continue;
            };
            let resolved = heritage
                .types
                .iter()
                .map(|ty| self.resolver.resolve_heritage(scope, ty));
            if heritage.token == SyntaxKind::ImplementsKeyword {
                implements.extend(resolved);
            } else {
                extends.extend(resolved);
            }
        }
        (extends, implements)
    }
}
