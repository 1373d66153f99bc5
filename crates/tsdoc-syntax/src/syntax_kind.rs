//! Syntax kinds understood by the extractor.
//!
//! The set covers declarations, class/interface members, type nodes and the
//! handful of expression forms the extractor inspects. Frontends map anything
//! else onto the closest kind; type forms without structural data (conditional,
//! mapped, indexed access, ...) are kept as leaf nodes so their raw text can be
//! recovered.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown = 0,

    // Names and literals
    Identifier,
    PrivateIdentifier,
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    NoSubstitutionTemplateLiteral,
    QualifiedName,
    ComputedPropertyName,

    // Keywords used as literals, type keywords or operators
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    UndefinedKeyword,
    ThisKeyword,
    VoidKeyword,
    AnyKeyword,
    UnknownKeyword,
    NumberKeyword,
    StringKeyword,
    BooleanKeyword,
    NeverKeyword,
    ObjectKeyword,
    SymbolKeyword,
    BigIntKeyword,
    UniqueKeyword,
    KeyOfKeyword,
    ReadonlyKeyword,
    ExtendsKeyword,
    ImplementsKeyword,

    // Modifiers
    ExportKeyword,
    DefaultKeyword,
    DeclareKeyword,
    AbstractKeyword,
    StaticKeyword,
    PublicKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    ConstKeyword,
    AsyncKeyword,
    OverrideKeyword,
    AccessorKeyword,

    // Statements and declarations
    ClassDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    EnumMember,
    TypeAliasDeclaration,
    FunctionDeclaration,
    VariableStatement,
    VariableDeclaration,
    ModuleDeclaration,
    ModuleBlock,
    ImportDeclaration,
    ExportDeclaration,
    ExportAssignment,
    ExpressionStatement,
    EmptyStatement,
    Block,

    // Class and type members
    PropertyDeclaration,
    MethodDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,
    IndexSignature,
    PropertySignature,
    MethodSignature,
    CallSignature,
    ConstructSignature,
    ClassStaticBlockDeclaration,
    SemicolonClassElement,

    // Signature parts
    Parameter,
    TypeParameter,
    HeritageClause,
    ExpressionWithTypeArguments,
    Decorator,

    // Type nodes
    TypeReference,
    FunctionType,
    ConstructorType,
    TypeLiteral,
    UnionType,
    IntersectionType,
    TupleType,
    ArrayType,
    TypeOperator,
    ParenthesizedType,
    ThisType,
    LiteralType,
    TypeQuery,
    IndexedAccessType,
    MappedType,
    ConditionalType,
    InferType,
    TemplateLiteralType,
    TypePredicate,
    ImportType,
    NamedTupleMember,
    OptionalType,
    RestType,

    // Expressions
    PropertyAccessExpression,
    ElementAccessExpression,
    NewExpression,
    CallExpression,
    ArrowFunction,
    FunctionExpression,
    ClassExpression,
    ObjectLiteralExpression,
    ArrayLiteralExpression,
    PrefixUnaryExpression,
    BinaryExpression,
    ParenthesizedExpression,
    TemplateExpression,
    AsExpression,
}

impl SyntaxKind {
    /// Keywords that may appear in a modifier list.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::ExportKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::AccessorKeyword
        )
    }

    /// Kinds that can start a type node.
    pub fn is_type_node(self) -> bool {
        matches!(
            self,
            SyntaxKind::VoidKeyword
                | SyntaxKind::AnyKeyword
                | SyntaxKind::UnknownKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::NeverKeyword
                | SyntaxKind::ObjectKeyword
                | SyntaxKind::SymbolKeyword
                | SyntaxKind::BigIntKeyword
                | SyntaxKind::UndefinedKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::TypeReference
                | SyntaxKind::FunctionType
                | SyntaxKind::ConstructorType
                | SyntaxKind::TypeLiteral
                | SyntaxKind::UnionType
                | SyntaxKind::IntersectionType
                | SyntaxKind::TupleType
                | SyntaxKind::ArrayType
                | SyntaxKind::TypeOperator
                | SyntaxKind::ParenthesizedType
                | SyntaxKind::ThisType
                | SyntaxKind::LiteralType
                | SyntaxKind::TypeQuery
                | SyntaxKind::IndexedAccessType
                | SyntaxKind::MappedType
                | SyntaxKind::ConditionalType
                | SyntaxKind::InferType
                | SyntaxKind::TemplateLiteralType
                | SyntaxKind::TypePredicate
                | SyntaxKind::ImportType
                | SyntaxKind::NamedTupleMember
                | SyntaxKind::OptionalType
                | SyntaxKind::RestType
        )
    }

    /// Function-like nodes whose data is stored as [`crate::node::FunctionData`].
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::Constructor
                | SyntaxKind::GetAccessor
                | SyntaxKind::SetAccessor
                | SyntaxKind::MethodSignature
                | SyntaxKind::CallSignature
                | SyntaxKind::ConstructSignature
                | SyntaxKind::FunctionType
                | SyntaxKind::ConstructorType
                | SyntaxKind::ArrowFunction
                | SyntaxKind::FunctionExpression
        )
    }
}
