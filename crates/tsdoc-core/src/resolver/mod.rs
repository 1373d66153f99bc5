//! Type resolver: maps type syntax to the closed [`Type`] model.
//!
//! Resolution is a pure function of the node, the checker and the reference
//! index. It never fails: any syntax form without a structural mapping
//! degrades to [`Type::Stringified`] carrying the node's source text, and any
//! symbol the index cannot place degrades to a stringified reference.

mod signatures;
mod symbols;

pub(crate) use symbols::{entity_name_text, member_name};

use crate::model::{ArrowFunctionType, Module, ObjectProperty, Type, TypeReference};
use crate::reference::{ReferenceIndex, ResolveContext};
use tsdoc_syntax::node::Node;
use tsdoc_syntax::{FileId, NodeIndex, NodeList, SourceFile, SyntaxKind, TypeChecker};

/// The file and module a declaration is being resolved in.
#[derive(Clone, Debug)]
pub struct Scope<'a> {
    pub file: FileId,
    pub source: &'a SourceFile,
    pub module_path: Vec<String>,
    /// Repository identifier of the enclosing module
    pub repository: Option<String>,
    pub in_namespace: bool,
}

impl<'a> Scope<'a> {
    /// Scope at the project root, without a repository.
    pub fn new(file: FileId, source: &'a SourceFile) -> Self {
        Scope {
            file,
            source,
            module_path: Vec::new(),
            repository: None,
            in_namespace: false,
        }
    }

    pub fn for_module(file: FileId, source: &'a SourceFile, module: &Module) -> Self {
        Scope {
            file,
            source,
            module_path: module.path.clone(),
            repository: module.repository.clone(),
            in_namespace: module.is_namespace,
        }
    }
}

pub struct TypeResolver<'a> {
    checker: &'a dyn TypeChecker,
    index: &'a dyn ReferenceIndex,
}

impl<'a> TypeResolver<'a> {
    pub fn new(checker: &'a dyn TypeChecker, index: &'a dyn ReferenceIndex) -> Self {
        TypeResolver { checker, index }
    }

    pub fn checker(&self) -> &'a dyn TypeChecker {
        self.checker
    }

    fn context<'s>(&'s self, scope: &'s Scope<'_>) -> ResolveContext<'s> {
        ResolveContext {
            checker: self.checker,
            file: scope.file,
            module_path: &scope.module_path,
        }
    }

    /// Source text of `idx` as a stringified type.
    fn raw(&self, scope: &Scope<'_>, idx: NodeIndex) -> Type {
        Type::stringified(scope.source.node_text(idx))
    }

    /// Resolve an optional child; `None` when the child is absent.
    pub fn resolve_optional_type(&self, scope: &Scope<'_>, idx: NodeIndex) -> Option<Type> {
        idx.to_option().map(|idx| self.resolve_type(scope, idx))
    }

    pub fn resolve_type_list(&self, scope: &Scope<'_>, list: Option<&NodeList>) -> Vec<Type> {
        list.map(|list| list.iter().map(|idx| self.resolve_type(scope, idx)).collect())
            .unwrap_or_default()
    }

    /// Resolve a type node.
    pub fn resolve_type(&self, scope: &Scope<'_>, idx: NodeIndex) -> Type {
        let Some(node) = scope.source.arena.get(idx) else {
            return self.raw(scope, idx);
        };

        match node.kind {
            // =================================================================
            // Keyword types
            // =================================================================
            SyntaxKind::NumberKeyword => Type::Number,
            SyntaxKind::StringKeyword => Type::String,
            SyntaxKind::BooleanKeyword => Type::Boolean,
            SyntaxKind::TrueKeyword => Type::True,
            SyntaxKind::FalseKeyword => Type::False,
            SyntaxKind::UndefinedKeyword => Type::Undefined,
            SyntaxKind::NullKeyword => Type::Null,
            SyntaxKind::VoidKeyword => Type::Void,
            SyntaxKind::AnyKeyword => Type::Any,
            SyntaxKind::UnknownKeyword => Type::Unknown,
            SyntaxKind::NeverKeyword => Type::Never,
            SyntaxKind::ObjectKeyword => Type::Object,
            SyntaxKind::SymbolKeyword => Type::Symbol,
            SyntaxKind::BigIntKeyword => Type::BigInt,

            // =================================================================
            // References
            // =================================================================
            SyntaxKind::TypeReference => self.resolve_type_reference(scope, idx, node),
            SyntaxKind::Identifier | SyntaxKind::QualifiedName => {
                Type::reference(self.resolve_type_name(scope, idx))
            }
            SyntaxKind::ExpressionWithTypeArguments => {
                Type::Reference(self.resolve_heritage(scope, idx))
            }
            SyntaxKind::ThisType | SyntaxKind::ThisKeyword => self.resolve_this_type(scope, idx),

            // =================================================================
            // Function and object types
            // =================================================================
            SyntaxKind::FunctionType | SyntaxKind::ConstructorType => {
                self.resolve_function_type(scope, idx, node)
            }
            SyntaxKind::TypeLiteral => {
                let Some(literal) = scope.source.arena.get_type_literal(node) else {
                    return self.raw(scope, idx);
                };
                Type::ObjectLiteral {
                    properties: self.resolve_object_members(scope, &literal.members),
                }
            }

            // =================================================================
            // Composite types
            // =================================================================
            SyntaxKind::UnionType | SyntaxKind::IntersectionType | SyntaxKind::TupleType => {
                let Some(composite) = scope.source.arena.get_composite_type(node) else {
                    return self.raw(scope, idx);
                };
                let types = self.resolve_type_list(scope, Some(&composite.types));
                match node.kind {
                    SyntaxKind::UnionType => Type::Union { types },
                    SyntaxKind::IntersectionType => Type::Intersection { types },
                    _ => Type::Tuple { types },
                }
            }
            SyntaxKind::ArrayType => {
                let Some(array) = scope.source.arena.get_array_type(node) else {
                    return self.raw(scope, idx);
                };
                Type::Array {
                    element: Box::new(self.resolve_type(scope, array.element_type)),
                }
            }

            // =================================================================
            // Operators and wrappers
            // =================================================================
            SyntaxKind::TypeOperator => self.resolve_type_operator(scope, idx, node),
            SyntaxKind::ParenthesizedType => match scope.source.arena.get_wrapped_type(node) {
                Some(wrapped) => self.resolve_type(scope, wrapped.type_node),
                None => self.raw(scope, idx),
            },

            // =================================================================
            // Literal types
            // =================================================================
            SyntaxKind::LiteralType => match scope.source.arena.get_literal_type(node) {
                Some(literal) => self.resolve_literal(scope, literal.literal),
                None => self.raw(scope, idx),
            },
            SyntaxKind::NumericLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::PrefixUnaryExpression => self.resolve_literal(scope, idx),

            // Mapped, conditional, indexed access, typeof, template literal, ...
            _ => self.raw(scope, idx),
        }
    }

    fn resolve_type_reference(&self, scope: &Scope<'_>, idx: NodeIndex, node: &Node) -> Type {
        let Some(data) = scope.source.arena.get_type_ref(node) else {
            return self.raw(scope, idx);
        };
        Type::Reference(TypeReference {
            target: self.resolve_type_name(scope, data.type_name),
            type_arguments: self.resolve_type_list(scope, data.type_arguments.as_ref()),
        })
    }

    fn resolve_this_type(&self, scope: &Scope<'_>, idx: NodeIndex) -> Type {
        match self.checker.symbol_at_location(scope.file, idx) {
            Some(symbol) => Type::reference(self.resolve_symbol(scope, symbol, "this")),
            None => self.raw(scope, idx),
        }
    }

    fn resolve_function_type(&self, scope: &Scope<'_>, idx: NodeIndex, node: &Node) -> Type {
        let Some(func) = scope.source.arena.get_function(node) else {
            return self.raw(scope, idx);
        };
        Type::ArrowFunction(Box::new(ArrowFunctionType {
            parameters: self.resolve_parameters(scope, &func.parameters),
            return_type: self.resolve_optional_type(scope, func.type_annotation),
            type_parameters: self.resolve_type_parameters(scope, func.type_parameters.as_ref()),
        }))
    }

    fn resolve_type_operator(&self, scope: &Scope<'_>, idx: NodeIndex, node: &Node) -> Type {
        let Some(op) = scope.source.arena.get_type_operator(node) else {
            return self.raw(scope, idx);
        };
        let inner = || Box::new(self.resolve_type(scope, op.type_node));
        match op.operator {
            SyntaxKind::UniqueKeyword => Type::Unique { inner: inner() },
            SyntaxKind::KeyOfKeyword => Type::Keyof { inner: inner() },
            SyntaxKind::ReadonlyKeyword => Type::Readonly { inner: inner() },
            _ => self.raw(scope, idx),
        }
    }

    /// Literal in type position (`"a"`, `1`, `-1`, `true`, `null`).
    fn resolve_literal(&self, scope: &Scope<'_>, idx: NodeIndex) -> Type {
        let arena = &scope.source.arena;
        let Some(node) = arena.get(idx) else {
            return self.raw(scope, idx);
        };
        match node.kind {
            SyntaxKind::NumericLiteral => Type::NumberLiteral {
                value: literal_text(scope, idx),
            },
            SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral => {
                Type::StringLiteral {
                    value: literal_text(scope, idx),
                }
            }
            SyntaxKind::PrefixUnaryExpression if is_signed_number(scope.source.node_text(idx)) => {
                Type::NumberLiteral {
                    value: scope.source.node_text(idx).to_string(),
                }
            }
            SyntaxKind::TrueKeyword => Type::True,
            SyntaxKind::FalseKeyword => Type::False,
            SyntaxKind::NullKeyword => Type::Null,
            SyntaxKind::UndefinedKeyword => Type::Undefined,
            _ => self.raw(scope, idx),
        }
    }

    pub(crate) fn resolve_object_members(
        &self,
        scope: &Scope<'_>,
        members: &NodeList,
    ) -> Vec<ObjectProperty> {
        members
            .iter()
            .filter_map(|member| self.resolve_object_member(scope, member))
            .collect()
    }
}

/// Literal value; the unquoted value for strings, the source text otherwise.
fn literal_text(scope: &Scope<'_>, idx: NodeIndex) -> String {
    scope
        .source
        .arena
        .identifier_text(idx)
        .map(str::to_string)
        .unwrap_or_else(|| scope.source.node_text(idx).to_string())
}

/// `-1`, `+2.5`
pub(crate) fn is_signed_number(text: &str) -> bool {
    let digits = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or("")
        .trim_start();
    !digits.is_empty() && digits.parse::<f64>().is_ok()
}

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod resolver_tests;
