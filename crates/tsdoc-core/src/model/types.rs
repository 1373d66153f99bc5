//! The type model: a closed tagged union every type syntax form maps into.

use super::declarations::{JsDocData, Loc};
use serde::Serialize;

/// A resolved type. Serialized with a `kind` tag.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Type {
    // Keyword types
    Number,
    String,
    Boolean,
    True,
    False,
    Undefined,
    Null,
    Void,
    Any,
    Unknown,
    Never,
    Object,
    Symbol,
    #[serde(rename = "bigint")]
    BigInt,

    // Literal types, raw text
    NumberLiteral {
        value: String,
    },
    StringLiteral {
        value: String,
    },

    Reference(TypeReference),
    ArrowFunction(Box<ArrowFunctionType>),
    ObjectLiteral {
        properties: Vec<ObjectProperty>,
    },

    Union {
        types: Vec<Type>,
    },
    Intersection {
        types: Vec<Type>,
    },
    Tuple {
        types: Vec<Type>,
    },
    Array {
        element: Box<Type>,
    },

    Unique {
        inner: Box<Type>,
    },
    Keyof {
        inner: Box<Type>,
    },
    Readonly {
        inner: Box<Type>,
    },

    /// Anything without a structural mapping, as written in source.
    Stringified {
        value: String,
    },
}

impl Type {
    pub fn stringified(value: impl Into<String>) -> Type {
        Type::Stringified {
            value: value.into(),
        }
    }

    pub fn reference(target: Reference) -> Type {
        Type::Reference(TypeReference {
            target,
            type_arguments: Vec::new(),
        })
    }

    pub fn is_stringified(&self) -> bool {
        matches!(self, Type::Stringified { .. })
    }
}

/// A reference to a declaration, optionally with type arguments.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReference {
    pub target: Reference,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<Type>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowFunctionType {
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameter>,
}

// =============================================================================
// References
// =============================================================================

/// Declaration kinds a reference can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    TypeAlias,
    Function,
    Constant,
    Module,
}

/// Where a symbol lives: its name, the module path down to it, and whether it
/// comes from outside the documented project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTarget {
    pub name: String,
    pub path: Vec<String>,
    pub external: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<DeclarationKind>,
}

impl ReferenceTarget {
    pub fn new(name: impl Into<String>, path: Vec<String>) -> Self {
        ReferenceTarget {
            name: name.into(),
            path,
            external: false,
            declaration: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Reference {
    Declaration(ReferenceTarget),
    /// A platform builtin with no project declaration (`Promise`, `Map`, ...)
    DefaultApi { name: String },
    /// A member of an enum; `target` is the enum's own reference
    EnumMember {
        target: Box<Reference>,
        member: String,
    },
    /// No real target; the name as written
    Stringified { name: String },
}

impl Reference {
    pub fn stringified(name: impl Into<String>) -> Reference {
        Reference::Stringified { name: name.into() }
    }

    /// Display name of the referenced entity.
    pub fn name(&self) -> &str {
        match self {
            Reference::Declaration(target) => &target.name,
            Reference::DefaultApi { name } | Reference::Stringified { name } => name,
            Reference::EnumMember { member, .. } => member,
        }
    }
}

// =============================================================================
// Parameters and members
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeParameter {
    pub name: String,
    pub constraint: Option<Type>,
    pub default: Option<Type>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<Type>,
    pub default_value: Option<Type>,
    pub rest: bool,
    pub optional: bool,
    /// Text of the matching `@param` tag
    pub comment: Option<String>,
}

/// A member of an object literal type or interface.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ObjectProperty {
    Property(PropertySignature),
    IndexSignature(IndexSignature),
}

impl ObjectProperty {
    pub fn name(&self) -> &str {
        match self {
            ObjectProperty::Property(prop) => &prop.name,
            ObjectProperty::IndexSignature(sig) => &sig.key_name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySignature {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<Type>,
    pub optional: bool,
    pub readonly: bool,
    pub loc: Loc,
    pub jsdoc: Option<JsDocData>,
}

/// `[key: K]: V`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSignature {
    pub key_name: String,
    pub key_type: Option<Type>,
    #[serde(rename = "type")]
    pub ty: Option<Type>,
    pub readonly: bool,
}
