//! Node header and typed node data.
//!
//! Every node carries its kind, packed flags and source span inline. Child
//! structure lives in [`NodeData`], one variant per data layout; several kinds
//! share a layout (all function-like kinds use [`FunctionData`], property
//! declarations and property signatures use [`PropertyDeclData`], ...).
//!
//! Optional children are stored as `NodeIndex::NONE`, optional lists as
//! `None`, so every data struct has a meaningful `Default`.

use crate::base::{NodeIndex, NodeList};
use crate::syntax_kind::SyntaxKind;
use serde::{Deserialize, Serialize};

/// Flags stored on `Node::flags`.
pub mod node_flags {
    pub const NONE: u16 = 0;
    /// `let` variable statement
    pub const LET: u16 = 1 << 0;
    /// `const` variable statement
    pub const CONST: u16 = 1 << 1;
    /// Module declaration written with the `namespace` keyword
    pub const NAMESPACE: u16 = 1 << 2;
    /// Ambient `declare global { }` block
    pub const GLOBAL_AUGMENTATION: u16 = 1 << 3;
}

/// Modifier keywords folded into a bit set.
pub mod modifier_flags {
    use crate::syntax_kind::SyntaxKind;

    pub const NONE: u32 = 0;
    pub const EXPORT: u32 = 1 << 0;
    pub const DEFAULT: u32 = 1 << 1;
    pub const DECLARE: u32 = 1 << 2;
    pub const ABSTRACT: u32 = 1 << 3;
    pub const STATIC: u32 = 1 << 4;
    pub const PUBLIC: u32 = 1 << 5;
    pub const PRIVATE: u32 = 1 << 6;
    pub const PROTECTED: u32 = 1 << 7;
    pub const READONLY: u32 = 1 << 8;
    pub const CONST: u32 = 1 << 9;
    pub const ASYNC: u32 = 1 << 10;
    pub const OVERRIDE: u32 = 1 << 11;
    pub const ACCESSOR: u32 = 1 << 12;

    /// Modifiers that turn a constructor parameter into a class property.
    pub const PARAMETER_PROPERTY: u32 = PUBLIC | PRIVATE | PROTECTED | READONLY;

    pub fn from_kind(kind: SyntaxKind) -> u32 {
        match kind {
            SyntaxKind::ExportKeyword => EXPORT,
            SyntaxKind::DefaultKeyword => DEFAULT,
            SyntaxKind::DeclareKeyword => DECLARE,
            SyntaxKind::AbstractKeyword => ABSTRACT,
            SyntaxKind::StaticKeyword => STATIC,
            SyntaxKind::PublicKeyword => PUBLIC,
            SyntaxKind::PrivateKeyword => PRIVATE,
            SyntaxKind::ProtectedKeyword => PROTECTED,
            SyntaxKind::ReadonlyKeyword => READONLY,
            SyntaxKind::ConstKeyword => CONST,
            SyntaxKind::AsyncKeyword => ASYNC,
            SyntaxKind::OverrideKeyword => OVERRIDE,
            SyntaxKind::AccessorKeyword => ACCESSOR,
            _ => NONE,
        }
    }
}

/// A syntax node: kind, flags, span and typed data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    /// Packed `node_flags`
    #[serde(default)]
    pub flags: u16,
    /// Start position in source (byte offset)
    pub pos: u32,
    /// End position in source (byte offset)
    pub end: u32,
    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    /// Position used for nodes that have no source text (synthesized by a frontend).
    pub const SYNTHETIC_POS: u32 = u32::MAX;

    pub fn new(kind: SyntaxKind, pos: u32, end: u32, data: NodeData) -> Node {
        Node {
            kind,
            flags: node_flags::NONE,
            pos,
            end,
            data,
        }
    }

    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.pos == Self::SYNTHETIC_POS || self.end < self.pos
    }

    #[inline]
    pub fn has_flag(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }
}

// =============================================================================
// Typed Node Data
// =============================================================================

/// Data for identifier nodes (Identifier, PrivateIdentifier)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentifierData {
    pub text: String,
}

/// Data for string/numeric literals. String literals store the unquoted value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

/// Data for qualified names (`A.B` in type position)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// Data for property access expressions (`a.b`)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name: NodeIndex,
}

/// Data for `new` and call expressions
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub arguments: Option<NodeList>,
}

/// Data for class declarations
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

/// Data for interface declarations
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InterfaceData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

/// Data for enum declarations
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub members: NodeList,
}

/// Data for enum members
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumMemberData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for type alias declarations
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeAliasData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub type_node: NodeIndex,
}

/// Data shared by every function-like node: function declarations, methods,
/// constructors, accessors, method/call/construct signatures and function types.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

/// Data for variable statements; `let`/`const` live in `Node::flags`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableStatementData {
    pub modifiers: Option<NodeList>,
    pub declarations: NodeList,
}

/// Data for a single variable declarator
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for module/namespace declarations. `body` is a `ModuleBlock` or, for
/// dotted names (`namespace A.B {}`), a nested `ModuleDeclaration`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub body: NodeIndex,
}

/// Data for module blocks
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleBlockData {
    pub statements: NodeList,
}

/// Data for property declarations and property signatures
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDeclData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for index signatures (`[key: string]: T`)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexSignatureData {
    pub modifiers: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
}

/// Data for parameters
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterData {
    pub modifiers: Option<NodeList>,
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for type parameter declarations
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeParameterData {
    pub name: NodeIndex,
    pub constraint: NodeIndex,
    pub default: NodeIndex,
}

/// Data for heritage clauses
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeritageData {
    /// `ExtendsKeyword` or `ImplementsKeyword`
    pub token: SyntaxKind,
    pub types: NodeList,
}

impl Default for HeritageData {
    fn default() -> Self {
        HeritageData {
            token: SyntaxKind::ExtendsKeyword,
            types: NodeList::default(),
        }
    }
}

/// Data for expression with type arguments (heritage clause entries)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExprWithTypeArgsData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// Data for type references
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeRefData {
    pub type_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// Data for union, intersection and tuple types
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeTypeData {
    pub types: NodeList,
}

/// Data for type literals (`{ a: string }`)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeLiteralData {
    pub members: NodeList,
}

/// Data for array types (`T[]`)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayTypeData {
    pub element_type: NodeIndex,
}

/// Data for type operators (`keyof T`, `unique symbol`, `readonly T[]`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeOperatorData {
    pub operator: SyntaxKind,
    pub type_node: NodeIndex,
}

impl Default for TypeOperatorData {
    fn default() -> Self {
        TypeOperatorData {
            operator: SyntaxKind::KeyOfKeyword,
            type_node: NodeIndex::NONE,
        }
    }
}

/// Data for types wrapping exactly one type (parenthesized, optional, rest)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WrappedTypeData {
    pub type_node: NodeIndex,
}

/// Data for literal types (`"a"`, `1`, `true`, `null`)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LiteralTypeData {
    pub literal: NodeIndex,
}

/// Typed payload of a node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum NodeData {
    #[default]
    None,
    Identifier(IdentifierData),
    Literal(LiteralData),
    QualifiedName(QualifiedNameData),
    Access(AccessExprData),
    Call(CallExprData),
    Class(ClassData),
    Interface(InterfaceData),
    Enum(EnumData),
    EnumMember(EnumMemberData),
    TypeAlias(TypeAliasData),
    Function(FunctionData),
    VariableStatement(VariableStatementData),
    VariableDeclaration(VariableDeclarationData),
    Module(ModuleData),
    ModuleBlock(ModuleBlockData),
    PropertyDecl(PropertyDeclData),
    IndexSignature(IndexSignatureData),
    Parameter(ParameterData),
    TypeParameter(TypeParameterData),
    Heritage(HeritageData),
    ExprWithTypeArgs(ExprWithTypeArgsData),
    TypeRef(TypeRefData),
    CompositeType(CompositeTypeData),
    TypeLiteral(TypeLiteralData),
    ArrayType(ArrayTypeData),
    TypeOperator(TypeOperatorData),
    WrappedType(WrappedTypeData),
    LiteralType(LiteralTypeData),
}

fn push_node(out: &mut Vec<NodeIndex>, idx: NodeIndex) {
    if idx.is_some() {
        out.push(idx);
    }
}

fn push_list(out: &mut Vec<NodeIndex>, list: &NodeList) {
    out.extend(list.iter().filter(|idx| idx.is_some()));
}

fn push_opt_list(out: &mut Vec<NodeIndex>, list: &Option<NodeList>) {
    if let Some(list) = list {
        push_list(out, list);
    }
}

impl NodeData {
    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        match self {
            NodeData::None | NodeData::Identifier(_) | NodeData::Literal(_) => {}
            NodeData::QualifiedName(d) => {
                push_node(&mut out, d.left);
                push_node(&mut out, d.right);
            }
            NodeData::Access(d) => {
                push_node(&mut out, d.expression);
                push_node(&mut out, d.name);
            }
            NodeData::Call(d) => {
                push_node(&mut out, d.expression);
                push_opt_list(&mut out, &d.type_arguments);
                push_opt_list(&mut out, &d.arguments);
            }
            NodeData::Class(d) => {
                push_opt_list(&mut out, &d.modifiers);
                push_node(&mut out, d.name);
                push_opt_list(&mut out, &d.type_parameters);
                push_opt_list(&mut out, &d.heritage_clauses);
                push_list(&mut out, &d.members);
            }
            NodeData::Interface(d) => {
                push_opt_list(&mut out, &d.modifiers);
                push_node(&mut out, d.name);
                push_opt_list(&mut out, &d.type_parameters);
                push_opt_list(&mut out, &d.heritage_clauses);
                push_list(&mut out, &d.members);
            }
            NodeData::Enum(d) => {
                push_opt_list(&mut out, &d.modifiers);
                push_node(&mut out, d.name);
                push_list(&mut out, &d.members);
            }
            NodeData::EnumMember(d) => {
                push_node(&mut out, d.name);
                push_node(&mut out, d.initializer);
            }
            NodeData::TypeAlias(d) => {
                push_opt_list(&mut out, &d.modifiers);
                push_node(&mut out, d.name);
                push_opt_list(&mut out, &d.type_parameters);
                push_node(&mut out, d.type_node);
            }
            NodeData::Function(d) => {
                push_opt_list(&mut out, &d.modifiers);
                push_node(&mut out, d.name);
                push_opt_list(&mut out, &d.type_parameters);
                push_list(&mut out, &d.parameters);
                push_node(&mut out, d.type_annotation);
                push_node(&mut out, d.body);
            }
            NodeData::VariableStatement(d) => {
                push_opt_list(&mut out, &d.modifiers);
                push_list(&mut out, &d.declarations);
            }
            NodeData::VariableDeclaration(d) => {
                push_node(&mut out, d.name);
                push_node(&mut out, d.type_annotation);
                push_node(&mut out, d.initializer);
            }
            NodeData::Module(d) => {
                push_opt_list(&mut out, &d.modifiers);
                push_node(&mut out, d.name);
                push_node(&mut out, d.body);
            }
            NodeData::ModuleBlock(d) => push_list(&mut out, &d.statements),
            NodeData::PropertyDecl(d) => {
                push_opt_list(&mut out, &d.modifiers);
                push_node(&mut out, d.name);
                push_node(&mut out, d.type_annotation);
                push_node(&mut out, d.initializer);
            }
            NodeData::IndexSignature(d) => {
                push_opt_list(&mut out, &d.modifiers);
                push_list(&mut out, &d.parameters);
                push_node(&mut out, d.type_annotation);
            }
            NodeData::Parameter(d) => {
                push_opt_list(&mut out, &d.modifiers);
                push_node(&mut out, d.name);
                push_node(&mut out, d.type_annotation);
                push_node(&mut out, d.initializer);
            }
            NodeData::TypeParameter(d) => {
                push_node(&mut out, d.name);
                push_node(&mut out, d.constraint);
                push_node(&mut out, d.default);
            }
            NodeData::Heritage(d) => push_list(&mut out, &d.types),
            NodeData::ExprWithTypeArgs(d) => {
                push_node(&mut out, d.expression);
                push_opt_list(&mut out, &d.type_arguments);
            }
            NodeData::TypeRef(d) => {
                push_node(&mut out, d.type_name);
                push_opt_list(&mut out, &d.type_arguments);
            }
            NodeData::CompositeType(d) => push_list(&mut out, &d.types),
            NodeData::TypeLiteral(d) => push_list(&mut out, &d.members),
            NodeData::ArrayType(d) => push_node(&mut out, d.element_type),
            NodeData::TypeOperator(d) => push_node(&mut out, d.type_node),
            NodeData::WrappedType(d) => push_node(&mut out, d.type_node),
            NodeData::LiteralType(d) => push_node(&mut out, d.literal),
        }
        out
    }
}
