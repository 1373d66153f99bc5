//! Parameters, type parameters, signatures and object members.

use super::{Scope, TypeResolver, member_name};
use crate::location;
use crate::model::{
    ArrowFunctionType, FunctionSignature, IndexSignature, ObjectProperty, Parameter,
    PropertySignature, Type, TypeParameter, TypeReference,
};
use tsdoc_syntax::{InferredType, NodeIndex, NodeList, SyntaxKind, modifier_flags};

impl TypeResolver<'_> {
    pub fn resolve_parameters(&self, scope: &Scope<'_>, parameters: &NodeList) -> Vec<Parameter> {
        parameters
            .iter()
            .filter_map(|param| self.resolve_parameter(scope, param))
            .collect()
    }

    pub fn resolve_parameter(&self, scope: &Scope<'_>, idx: NodeIndex) -> Option<Parameter> {
        let arena = &scope.source.arena;
        let param = arena.get_parameter(arena.get(idx)?)?;
        Some(Parameter {
            name: member_name(scope, param.name),
            ty: self.resolve_optional_type(scope, param.type_annotation),
            default_value: param
                .initializer
                .to_option()
                .map(|init| self.resolve_expression(scope, init)),
            rest: param.dot_dot_dot_token,
            optional: param.question_token || param.initializer.is_some(),
            comment: self.param_comment(scope, idx),
        })
    }

    pub fn resolve_type_parameters(
        &self,
        scope: &Scope<'_>,
        type_parameters: Option<&NodeList>,
    ) -> Vec<TypeParameter> {
        let Some(list) = type_parameters else {
            return Vec::new();
        };
        let arena = &scope.source.arena;
        list.iter()
            .filter_map(|idx| {
                let data = arena.get_type_parameter(arena.get(idx)?)?;
                Some(TypeParameter {
                    name: member_name(scope, data.name),
                    constraint: self.resolve_optional_type(scope, data.constraint),
                    default: self.resolve_optional_type(scope, data.default),
                })
            })
            .collect()
    }

    // =========================================================================
    // Return types
    // =========================================================================

    /// Declared return type, else the checker's inferred one.
    pub fn resolve_return_type(
        &self,
        scope: &Scope<'_>,
        declaration: NodeIndex,
        annotation: NodeIndex,
    ) -> Option<Type> {
        if annotation.is_some() {
            return Some(self.resolve_type(scope, annotation));
        }
        let signature = self.checker.inferred_signature(scope.file, declaration)?;
        let return_type = signature.return_type.as_ref()?;
        self.resolve_inferred_type(scope, return_type)
    }

    /// Only symbol-carrying inferred types resolve; type arguments without a
    /// symbol become `any`.
    fn resolve_inferred_type(&self, scope: &Scope<'_>, inferred: &InferredType) -> Option<Type> {
        let symbol = inferred.symbol?;
        let target = self.resolve_symbol(scope, symbol, &inferred.text);
        let type_arguments = inferred
            .type_arguments
            .iter()
            .map(|arg| self.resolve_inferred_type(scope, arg).unwrap_or(Type::Any))
            .collect();
        Some(Type::Reference(TypeReference {
            target,
            type_arguments,
        }))
    }

    // =========================================================================
    // Signatures
    // =========================================================================

    /// Signature of a function-like declaration.
    pub fn resolve_signature(&self, scope: &Scope<'_>, idx: NodeIndex) -> Option<FunctionSignature> {
        let arena = &scope.source.arena;
        let func = arena.get_function(arena.get(idx)?)?;
        Some(FunctionSignature {
            parameters: self.resolve_parameters(scope, &func.parameters),
            type_parameters: self.resolve_type_parameters(scope, func.type_parameters.as_ref()),
            return_type: self.resolve_return_type(scope, idx, func.type_annotation),
            loc: location::loc(scope, idx),
            jsdoc: self.extract_jsdoc(scope, idx),
        })
    }

    // =========================================================================
    // Object members
    // =========================================================================

    /// A property signature, method signature or index signature. Call and
    /// construct signatures have no property form and are skipped.
    pub fn resolve_object_member(&self, scope: &Scope<'_>, idx: NodeIndex) -> Option<ObjectProperty> {
        let arena = &scope.source.arena;
        let node = arena.get(idx)?;
        match node.kind {
            SyntaxKind::PropertySignature | SyntaxKind::PropertyDeclaration => {
                let prop = arena.get_property_decl(node)?;
                Some(ObjectProperty::Property(PropertySignature {
                    name: member_name(scope, prop.name),
                    ty: self.resolve_optional_type(scope, prop.type_annotation),
                    optional: prop.question_token,
                    readonly: arena.has_modifier(&prop.modifiers, modifier_flags::READONLY),
                    loc: location::loc(scope, idx),
                    jsdoc: self.extract_jsdoc(scope, idx),
                }))
            }
            SyntaxKind::MethodSignature => {
                let method = arena.get_function(node)?;
                let arrow = ArrowFunctionType {
                    parameters: self.resolve_parameters(scope, &method.parameters),
                    return_type: self.resolve_return_type(scope, idx, method.type_annotation),
                    type_parameters: self
                        .resolve_type_parameters(scope, method.type_parameters.as_ref()),
                };
                Some(ObjectProperty::Property(PropertySignature {
                    name: member_name(scope, method.name),
                    ty: Some(Type::ArrowFunction(Box::new(arrow))),
                    optional: method.question_token,
                    readonly: false,
                    loc: location::loc(scope, idx),
                    jsdoc: self.extract_jsdoc(scope, idx),
                }))
            }
            SyntaxKind::IndexSignature => {
                let sig = arena.get_index_signature(node)?;
                let key = sig
                    .parameters
                    .iter()
                    .next()
                    .and_then(|param| arena.get_parameter(arena.get(param)?));
                Some(ObjectProperty::IndexSignature(IndexSignature {
                    key_name: key
                        .map(|key| member_name(scope, key.name))
                        .unwrap_or_default(),
                    key_type: key
                        .and_then(|key| self.resolve_optional_type(scope, key.type_annotation)),
                    ty: self.resolve_optional_type(scope, sig.type_annotation),
                    readonly: arena.has_modifier(&sig.modifiers, modifier_flags::READONLY),
                }))
            }
            _ => None,
        }
    }
}
