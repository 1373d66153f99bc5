//! Symbol, heritage and expression resolution.

use super::{Scope, TypeResolver, is_signed_number};
use crate::model::{Reference, Type, TypeReference};
use crate::reference::SymbolTarget;
use tracing::trace;
use tsdoc_syntax::{NodeData, NodeIndex, SymbolId, SyntaxKind, symbol_flags};

/// Dotted name of an identifier, qualified name or property access chain.
pub(crate) fn entity_name_text(scope: &Scope<'_>, idx: NodeIndex) -> String {
    let Some(node) = scope.source.arena.get(idx) else {
        return String::new();
    };
    match &node.data {
        NodeData::Identifier(ident) => ident.text.clone(),
        NodeData::QualifiedName(name) => format!(
            "{}.{}",
            entity_name_text(scope, name.left),
            entity_name_text(scope, name.right)
        ),
        NodeData::Access(access) => format!(
            "{}.{}",
            entity_name_text(scope, access.expression),
            entity_name_text(scope, access.name)
        ),
        _ => scope.source.node_text(idx).to_string(),
    }
}

/// Display name of a declaration or member name node.
pub(crate) fn member_name(scope: &Scope<'_>, idx: NodeIndex) -> String {
    match scope.source.arena.identifier_text(idx) {
        Some(text) => text.to_string(),
        None => scope.source.node_text(idx).to_string(),
    }
}

impl TypeResolver<'_> {
    /// Symbol at a name node, falling back to the rightmost segment of a
    /// qualified name or property access.
    fn symbol_at(&self, scope: &Scope<'_>, idx: NodeIndex) -> Option<SymbolId> {
        if let Some(symbol) = self.checker.symbol_at_location(scope.file, idx) {
            return Some(symbol);
        }
        let node = scope.source.arena.get(idx)?;
        let right = match &node.data {
            NodeData::QualifiedName(name) => name.right,
            NodeData::Access(access) => access.name,
            _ => return None,
        };
        self.checker.symbol_at_location(scope.file, right)
    }

    fn is_internal(&self, symbol: SymbolId) -> bool {
        self.checker
            .symbol(symbol)
            .is_some_and(|sym| sym.has_any_flags(symbol_flags::INTERNAL))
    }

    /// Reference for a name no symbol was found for.
    fn unresolved_name(&self, name: &str) -> Reference {
        if self.index.is_default(name) {
            Reference::DefaultApi {
                name: name.to_string(),
            }
        } else {
            Reference::stringified(name)
        }
    }

    /// Ask the index for `a.b.C` by its last segment, with `a.b` as hint.
    fn resolve_qualified_name(&self, scope: &Scope<'_>, text: &str) -> Option<Reference> {
        let (prefix, last) = text.rsplit_once('.')?;
        self.index
            .resolve_symbol(SymbolTarget::Name(last), &self.context(scope), Some(prefix))
    }

    /// Resolve the name of a type reference.
    pub(crate) fn resolve_type_name(&self, scope: &Scope<'_>, idx: NodeIndex) -> Reference {
        let text = entity_name_text(scope, idx);
        let Some(symbol) = self.symbol_at(scope, idx) else {
            return self.unresolved_name(&text);
        };

        if self.is_internal(symbol) {
            trace!(name = %text, "internal symbol, re-resolving by qualified name");
            return self
                .resolve_qualified_name(scope, &text)
                .unwrap_or_else(|| self.unresolved_name(&text));
        }
        self.resolve_symbol(scope, symbol, &text)
    }

    /// Reference for a symbol; `fallback` is the name as written.
    pub fn resolve_symbol(&self, scope: &Scope<'_>, id: SymbolId, fallback: &str) -> Reference {
        let Some(symbol) = self.checker.symbol(id) else {
            return Reference::stringified(fallback);
        };
        let name = if symbol.name.is_empty() {
            fallback
        } else {
            symbol.name.as_str()
        };

        if symbol.has_any_flags(symbol_flags::TYPE_PARAMETER) {
            return Reference::stringified(name);
        }

        let context = self.context(scope);
        if symbol.has_any_flags(symbol_flags::ENUM_MEMBER) {
            let parent = symbol.parent.and_then(|parent| {
                self.index
                    .resolve_symbol(SymbolTarget::Symbol(parent), &context, None)
            });
            return match parent {
                Some(target) => Reference::EnumMember {
                    target: Box::new(target),
                    member: name.to_string(),
                },
                None => Reference::stringified(fallback),
            };
        }

        self.index
            .resolve_symbol(SymbolTarget::Symbol(id), &context, None)
            .unwrap_or_else(|| Reference::stringified(name))
    }

    // =========================================================================
    // Heritage
    // =========================================================================

    /// Resolve an `extends`/`implements` entry.
    pub fn resolve_heritage(&self, scope: &Scope<'_>, idx: NodeIndex) -> TypeReference {
        let arena = &scope.source.arena;
        let Some(data) = arena.get(idx).and_then(|node| arena.get_expr_type_args(node)) else {
            return TypeReference {
                target: Reference::stringified(scope.source.node_text(idx)),
                type_arguments: Vec::new(),
            };
        };
        TypeReference {
            target: self.resolve_heritage_expression(scope, data.expression),
            type_arguments: self.resolve_type_list(scope, data.type_arguments.as_ref()),
        }
    }

    fn resolve_heritage_expression(&self, scope: &Scope<'_>, expr: NodeIndex) -> Reference {
        match scope.source.arena.kind(expr) {
            Some(SyntaxKind::PropertyAccessExpression | SyntaxKind::QualifiedName) => {
                let text = entity_name_text(scope, expr);
                match self.symbol_at(scope, expr) {
                    Some(symbol) if !self.is_internal(symbol) => {
                        self.resolve_symbol(scope, symbol, &text)
                    }
                    _ => self
                        .resolve_qualified_name(scope, &text)
                        .unwrap_or_else(|| Reference::stringified(text.as_str())),
                }
            }
            Some(SyntaxKind::Identifier) => {
                let text = entity_name_text(scope, expr);
                match self.symbol_at(scope, expr) {
                    Some(symbol) => self.resolve_symbol(scope, symbol, &text),
                    None => self.unresolved_name(&text),
                }
            }
            _ => Reference::stringified(scope.source.node_text(expr)),
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Best-effort type of an initializer or default value expression.
    pub fn resolve_expression(&self, scope: &Scope<'_>, idx: NodeIndex) -> Type {
        let arena = &scope.source.arena;
        let Some(node) = arena.get(idx) else {
            return self.raw(scope, idx);
        };
        let text = scope.source.node_text(idx);

        match node.kind {
            SyntaxKind::NumericLiteral => Type::NumberLiteral {
                value: text.to_string(),
            },
            SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral => {
                Type::StringLiteral {
                    value: arena.identifier_text(idx).unwrap_or(text).to_string(),
                }
            }
            SyntaxKind::TrueKeyword => Type::True,
            SyntaxKind::FalseKeyword => Type::False,
            SyntaxKind::NullKeyword => Type::Null,
            SyntaxKind::UndefinedKeyword => Type::Undefined,
            SyntaxKind::Identifier if arena.identifier_text(idx) == Some("undefined") => {
                Type::Undefined
            }
            SyntaxKind::PrefixUnaryExpression if is_signed_number(text) => Type::NumberLiteral {
                value: text.to_string(),
            },
            SyntaxKind::NewExpression => {
                let Some(call) = arena.get_call_expr(node) else {
                    return self.raw(scope, idx);
                };
                let name = entity_name_text(scope, call.expression);
                let target = match self.symbol_at(scope, call.expression) {
                    Some(symbol) => self.resolve_symbol(scope, symbol, &name),
                    None => self.unresolved_name(&name),
                };
                Type::Reference(TypeReference {
                    target,
                    type_arguments: self.resolve_type_list(scope, call.type_arguments.as_ref()),
                })
            }
            SyntaxKind::PropertyAccessExpression => self
                .resolve_module_access(scope, idx)
                .unwrap_or_else(|| self.raw(scope, idx)),
            _ => self.raw(scope, idx),
        }
    }

    /// `ns.Member` where `ns` resolves to a module or namespace.
    fn resolve_module_access(&self, scope: &Scope<'_>, idx: NodeIndex) -> Option<Type> {
        let arena = &scope.source.arena;
        let access = arena.get_access_expr(arena.get(idx)?)?;
        let left = self.checker.symbol_at_location(scope.file, access.expression)?;
        let is_module = self
            .checker
            .symbol(left)
            .is_some_and(|sym| sym.has_any_flags(symbol_flags::MODULE));
        if !is_module {
            return None;
        }

        let text = entity_name_text(scope, idx);
        let target = match self.symbol_at(scope, idx) {
            Some(symbol) => self.resolve_symbol(scope, symbol, &text),
            None => self.resolve_qualified_name(scope, &text)?,
        };
        Some(Type::reference(target))
    }
}
