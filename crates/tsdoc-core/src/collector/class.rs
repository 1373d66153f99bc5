//! Visit phase for classes: members, accessors, constructor and heritage.

use super::Collector;
use crate::error::Result;
use crate::location;
use crate::model::{
    ClassConstructor, ClassMethod, ClassProperty, FunctionSignature, JsDocData, MemberFlags,
};
use crate::resolver::Scope;
use indexmap::IndexMap;
use tracing::trace;
use tsdoc_syntax::{Node, NodeArena, NodeIndex, NodeList, SyntaxKind, modifier_flags};

/// Access flags from a modifier list; `#name` members are private.
fn member_flags(arena: &NodeArena, modifiers: &Option<NodeList>, name: NodeIndex) -> MemberFlags {
    let flags = arena.modifier_flags(modifiers);
    MemberFlags {
        is_static: flags & modifier_flags::STATIC != 0,
        is_private: flags & modifier_flags::PRIVATE != 0
            || arena.kind(name) == Some(SyntaxKind::PrivateIdentifier),
        is_protected: flags & modifier_flags::PROTECTED != 0,
        is_readonly: flags & modifier_flags::READONLY != 0,
        is_abstract: flags & modifier_flags::ABSTRACT != 0,
    }
}

/// Members collected from one class body.
#[derive(Default)]
struct ClassMembers {
    properties: Vec<ClassProperty>,
    methods: IndexMap<String, ClassMethod>,
    constructor: Option<ClassConstructor>,
}

impl ClassMembers {
    /// Methods merge overloads by name.
    fn add_method(&mut self, name: String, flags: MemberFlags, signature: FunctionSignature) {
        self.methods
            .entry(name.clone())
            .or_insert_with(|| ClassMethod {
                name,
                flags,
                is_getter: false,
                is_setter: false,
                signatures: Vec::new(),
            })
            .signatures
            .push(signature);
    }

    /// Accessors are single-signature methods; a getter and a setter of the
    /// same name are kept apart, a repeated accessor replaces the earlier one.
    fn add_accessor(
        &mut self,
        name: String,
        getter: bool,
        flags: MemberFlags,
        signature: FunctionSignature,
    ) {
        let key = if getter {
            format!("get {name}")
        } else {
            format!("set {name}")
        };
        self.methods.insert(
            key,
            ClassMethod {
                name,
                flags,
                is_getter: getter,
                is_setter: !getter,
                signatures: vec![signature],
            },
        );
    }
}

impl Collector<'_, '_> {
    pub(super) fn visit_class(&mut self, node: &Node) -> Result<()> {
        let source = self.source;
        let Some(class) = source.arena.get_class(node) else {
            return Ok(());
        };
        let name = self.declaration_name(class.name);
        if !self.module().classes.contains_key(&name) {
            return Err(self.missing("class", &name));
        }

        let scope = self.scope();
        let type_parameters = self
            .resolver
            .resolve_type_parameters(&scope, class.type_parameters.as_ref());
        let (extends, implements) =
            self.resolve_heritage_clauses(&scope, class.heritage_clauses.as_ref());

        let mut members = ClassMembers::default();
        for member in class.members.iter() {
            self.collect_member(&scope, member, &mut members);
        }

        if let Some(decl) = self.module().classes.get_mut(&name) {
            decl.type_parameters = type_parameters;
            decl.extends = extends.into_iter().next();
            decl.implements = implements;
            decl.properties = members.properties;
            decl.methods = members.methods;
            decl.constructor = members.constructor;
        }
        Ok(())
    }

    fn collect_member(&self, scope: &Scope<'_>, idx: NodeIndex, members: &mut ClassMembers) {
        let arena = &self.source.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };
        let resolver = self.resolver;

        match node.kind {
            SyntaxKind::PropertyDeclaration => {
                let Some(prop) = arena.get_property_decl(node) else {
                    return;
                };
                // unannotated properties take the type of their initializer
                let ty = match prop.type_annotation.to_option() {
                    Some(annotation) => Some(resolver.resolve_type(scope, annotation)),
                    None => prop
                        .initializer
                        .to_option()
                        .map(|init| resolver.resolve_expression(scope, init)),
                };
                members.properties.push(ClassProperty {
                    name: self.declaration_name(prop.name),
                    ty,
                    flags: member_flags(arena, &prop.modifiers, prop.name),
                    optional: prop.question_token,
                    loc: location::loc(scope, idx),
                    jsdoc: resolver.extract_jsdoc(scope, idx),
                });
            }
            SyntaxKind::MethodDeclaration => {
                let Some(method) = arena.get_function(node) else {
                    return;
                };
                let Some(signature) = resolver.resolve_signature(scope, idx) else {
                    return;
                };
                members.add_method(
                    self.declaration_name(method.name),
                    member_flags(arena, &method.modifiers, method.name),
                    signature,
                );
            }
            SyntaxKind::GetAccessor | SyntaxKind::SetAccessor => {
                let Some(accessor) = arena.get_function(node) else {
                    return;
                };
                let Some(signature) = resolver.resolve_signature(scope, idx) else {
                    return;
                };
                members.add_accessor(
                    self.declaration_name(accessor.name),
                    node.kind == SyntaxKind::GetAccessor,
                    member_flags(arena, &accessor.modifiers, accessor.name),
                    signature,
                );
            }
            SyntaxKind::Constructor => {
                let Some(ctor) = arena.get_function(node) else {
                    return;
                };
                members
                    .properties
                    .extend(self.parameter_properties(scope, &ctor.parameters));
                // the last constructor declaration wins
                members.constructor = Some(ClassConstructor {
                    parameters: resolver.resolve_parameters(scope, &ctor.parameters),
                });
            }
            kind => trace!(?kind, "class member has no documentation counterpart"),
        }
    }

    /// Constructor parameters declared `public`/`private`/`protected`/`readonly`.
    fn parameter_properties(&self, scope: &Scope<'_>, parameters: &NodeList) -> Vec<ClassProperty> {
        let arena = &self.source.arena;
        parameters
            .iter()
            .filter_map(|idx| {
                let param = arena.get_parameter(arena.get(idx)?)?;
                if !arena.has_modifier(&param.modifiers, modifier_flags::PARAMETER_PROPERTY) {
                    return None;
                }
                let comment = self.resolver.param_comment(scope, idx);
                Some(ClassProperty {
                    name: self.declaration_name(param.name),
                    ty: self.resolver.resolve_optional_type(scope, param.type_annotation),
                    flags: member_flags(arena, &param.modifiers, param.name),
                    optional: param.question_token,
                    loc: location::loc(scope, idx),
                    jsdoc: comment.map(|comment| JsDocData {
                        comment: Some(comment),
                        tags: None,
                    }),
                })
            })
            .collect()
    }
}
