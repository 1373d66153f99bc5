//! Prepare phase: skeleton declarations.

use super::Collector;
use crate::error::Result;
use crate::location;
use crate::model::{ClassDecl, EnumDecl, EnumMember, InterfaceDecl, TypeDecl};
use tracing::{debug, warn};
use tsdoc_syntax::{Node, NodeIndex, SyntaxKind, modifier_flags};

impl Collector<'_, '_> {
    pub(super) fn prepare_statement(&mut self, idx: NodeIndex, node: &Node) -> Result<()> {
        match node.kind {
            SyntaxKind::ClassDeclaration => self.prepare_class(idx, node),
            SyntaxKind::InterfaceDeclaration => self.prepare_interface(idx, node),
            SyntaxKind::EnumDeclaration => self.prepare_enum(idx, node),
            SyntaxKind::TypeAliasDeclaration => self.prepare_type_alias(idx, node),
            _ => {}
        }
        Ok(())
    }

    fn prepare_class(&mut self, idx: NodeIndex, node: &Node) {
        let source = self.source;
        let arena = &source.arena;
        let Some(class) = arena.get_class(node) else {
            return;
        };
        let name = self.declaration_name(class.name);
        let flags = arena.modifier_flags(&class.modifiers);
        let scope = self.scope();

        let mut decl = ClassDecl::skeleton(
            name.as_str(),
            location::loc(&scope, idx),
            self.resolver.extract_jsdoc(&scope, idx),
        );
        decl.is_exported = flags & modifier_flags::EXPORT != 0;
        decl.is_abstract = flags & modifier_flags::ABSTRACT != 0;

        if self.module().classes.insert(name.clone(), decl).is_some() {
            warn!(
                class = %name,
                file = %source.file_name,
                "class declared twice in one module; keeping the last"
            );
        }
        debug!(class = %name, "prepared class");
    }

    fn prepare_interface(&mut self, idx: NodeIndex, node: &Node) {
        let source = self.source;
        let arena = &source.arena;
        let Some(interface) = arena.get_interface(node) else {
            return;
        };
        let name = self.declaration_name(interface.name);
        let exported = arena.has_modifier(&interface.modifiers, modifier_flags::EXPORT);
        let scope = self.scope();
        let loc = location::loc(&scope, idx);
        let jsdoc = self.resolver.extract_jsdoc(&scope, idx);

        let decl = self
            .module()
            .interfaces
            .entry(name.clone())
            .or_insert_with(|| InterfaceDecl::skeleton(name.as_str()));
        decl.is_exported |= exported;
        decl.loc.push(loc);
        decl.jsdoc.extend(jsdoc);
        debug!(interface = %name, declarations = decl.loc.len(), "prepared interface");
    }

    fn prepare_enum(&mut self, idx: NodeIndex, node: &Node) {
        let source = self.source;
        let arena = &source.arena;
        let Some(data) = arena.get_enum(node) else {
            return;
        };
        let name = self.declaration_name(data.name);
        let flags = arena.modifier_flags(&data.modifiers);
        let scope = self.scope();
        let loc = location::loc(&scope, idx);
        let jsdoc = self.resolver.extract_jsdoc(&scope, idx);

        let members: Vec<EnumMember> = data
            .members
            .iter()
            .filter_map(|member| {
                let member_data = arena.get_enum_member(arena.get(member)?)?;
                Some(EnumMember {
                    name: self.declaration_name(member_data.name),
                    initializer: member_data
                        .initializer
                        .to_option()
                        .map(|init| source.node_text(init).to_string()),
                    loc: location::loc(&scope, member),
                    jsdoc: self.resolver.extract_jsdoc(&scope, member),
                })
            })
            .collect();

        let created = !self.module().enums.contains_key(&name);
        let decl = self
            .module()
            .enums
            .entry(name.clone())
            .or_insert_with(|| EnumDecl::skeleton(name.as_str()));
        if created {
            decl.is_const = flags & modifier_flags::CONST != 0;
        }
        decl.is_exported |= flags & modifier_flags::EXPORT != 0;
        decl.loc.push(loc);
        decl.jsdoc.extend(jsdoc);
        decl.members.extend(members);
        debug!(enum_name = %name, members = decl.members.len(), "prepared enum");
    }

    fn prepare_type_alias(&mut self, idx: NodeIndex, node: &Node) {
        let source = self.source;
        let arena = &source.arena;
        let Some(alias) = arena.get_type_alias(node) else {
            return;
        };
        let name = self.declaration_name(alias.name);
        let scope = self.scope();
        let decl = TypeDecl {
            name: name.clone(),
            type_parameters: Vec::new(),
            value: None,
            loc: location::loc(&scope, idx),
            jsdoc: self.resolver.extract_jsdoc(&scope, idx),
            is_exported: arena.has_modifier(&alias.modifiers, modifier_flags::EXPORT),
        };
        if self.module().types.insert(name.clone(), decl).is_some() {
            warn!(
                alias = %name,
                file = %source.file_name,
                "type alias declared twice in one module; keeping the last"
            );
        }
        debug!(alias = %name, "prepared type alias");
    }
}
