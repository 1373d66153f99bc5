//! Declaration records filed under modules.

use super::types::{ObjectProperty, Parameter, Type, TypeParameter, TypeReference};
use indexmap::IndexMap;
use serde::Serialize;

/// Zero-based line and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Source provenance of a declaration; empty for synthetic nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Loc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<LineCol>,
    /// Followable locator (`<repository>/<file>#L<line>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
}

impl Loc {
    pub fn is_empty(&self) -> bool {
        self.pos.is_none() && self.source_file.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct JsDocData {
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<JsDocTagData>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JsDocTagData {
    pub name: String,
    pub comment: Option<String>,
    /// Parameter or property named by the tag
    pub arg: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<Type>,
}

/// Access flags shared by class properties and methods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberFlags {
    pub is_static: bool,
    pub is_private: bool,
    pub is_protected: bool,
    pub is_readonly: bool,
    pub is_abstract: bool,
}

// =============================================================================
// Functions
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSignature {
    pub parameters: Vec<Parameter>,
    pub type_parameters: Vec<TypeParameter>,
    pub return_type: Option<Type>,
    pub loc: Loc,
    pub jsdoc: Option<JsDocData>,
}

/// A function and every overload or same-named declaration of it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDecl {
    pub name: String,
    pub loc: Loc,
    pub jsdoc: Option<JsDocData>,
    pub is_exported: bool,
    pub signatures: Vec<FunctionSignature>,
}

// =============================================================================
// Classes
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<Type>,
    #[serde(flatten)]
    pub flags: MemberFlags,
    pub optional: bool,
    pub loc: Loc,
    pub jsdoc: Option<JsDocData>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMethod {
    pub name: String,
    #[serde(flatten)]
    pub flags: MemberFlags,
    pub is_getter: bool,
    pub is_setter: bool,
    pub signatures: Vec<FunctionSignature>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ClassConstructor {
    pub parameters: Vec<Parameter>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDecl {
    pub name: String,
    pub type_parameters: Vec<TypeParameter>,
    pub properties: Vec<ClassProperty>,
    /// Keyed by method name; accessors are keyed `get <name>` / `set <name>`
    #[serde(serialize_with = "crate::serializer::map_values")]
    pub methods: IndexMap<String, ClassMethod>,
    pub constructor: Option<ClassConstructor>,
    pub extends: Option<TypeReference>,
    pub implements: Vec<TypeReference>,
    pub loc: Loc,
    pub jsdoc: Option<JsDocData>,
    pub is_exported: bool,
    pub is_abstract: bool,
}

impl ClassDecl {
    /// Skeleton recorded before any type is resolved.
    pub fn skeleton(name: impl Into<String>, loc: Loc, jsdoc: Option<JsDocData>) -> Self {
        ClassDecl {
            name: name.into(),
            type_parameters: Vec::new(),
            properties: Vec::new(),
            methods: IndexMap::new(),
            constructor: None,
            extends: None,
            implements: Vec::new(),
            loc,
            jsdoc,
            is_exported: false,
            is_abstract: false,
        }
    }

    /// Method by its display name, ignoring accessors.
    pub fn method(&self, name: &str) -> Option<&ClassMethod> {
        self.methods.get(name)
    }

    pub fn property(&self, name: &str) -> Option<&ClassProperty> {
        self.properties.iter().find(|prop| prop.name == name)
    }
}

// =============================================================================
// Interfaces, enums, aliases, constants
// =============================================================================

/// An interface; locations, JSDoc blocks, members and heritage accumulate
/// across every declaration of the same name in a module.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDecl {
    pub name: String,
    pub type_parameters: Vec<TypeParameter>,
    pub properties: Vec<ObjectProperty>,
    pub extends: Vec<TypeReference>,
    pub loc: Vec<Loc>,
    pub jsdoc: Vec<JsDocData>,
    pub is_exported: bool,
}

impl InterfaceDecl {
    pub fn skeleton(name: impl Into<String>) -> Self {
        InterfaceDecl {
            name: name.into(),
            type_parameters: Vec::new(),
            properties: Vec::new(),
            extends: Vec::new(),
            loc: Vec::new(),
            jsdoc: Vec::new(),
            is_exported: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
    pub name: String,
    /// Initializer as written
    pub initializer: Option<String>,
    pub loc: Loc,
    pub jsdoc: Option<JsDocData>,
}

/// An enum; members, locations and JSDoc accumulate across declarations.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDecl {
    pub name: String,
    pub members: Vec<EnumMember>,
    pub loc: Vec<Loc>,
    pub jsdoc: Vec<JsDocData>,
    pub is_exported: bool,
    pub is_const: bool,
}

impl EnumDecl {
    pub fn skeleton(name: impl Into<String>) -> Self {
        EnumDecl {
            name: name.into(),
            members: Vec::new(),
            loc: Vec::new(),
            jsdoc: Vec::new(),
            is_exported: false,
            is_const: false,
        }
    }
}

/// A type alias; `value` is filled in during the visit phase.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDecl {
    pub name: String,
    pub type_parameters: Vec<TypeParameter>,
    pub value: Option<Type>,
    pub loc: Loc,
    pub jsdoc: Option<JsDocData>,
    pub is_exported: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<Type>,
    /// Initializer text, truncated
    pub content: String,
    pub loc: Loc,
    pub jsdoc: Option<JsDocData>,
}
