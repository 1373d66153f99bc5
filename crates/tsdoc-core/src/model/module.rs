//! Modules: one per directory below the base directory, one per namespace.

use super::declarations::{ClassDecl, ConstantDecl, EnumDecl, FunctionDecl, InterfaceDecl, TypeDecl};
use indexmap::IndexMap;

/// Index of a module inside a [`crate::ModuleTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub u32);

impl ModuleId {
    pub const ROOT: ModuleId = ModuleId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Module {
    pub name: String,
    /// Names from below the root down to this module
    pub path: Vec<String>,
    /// Locator base for declarations in this module
    pub repository: Option<String>,
    pub is_namespace: bool,
    pub parent: Option<ModuleId>,

    pub classes: IndexMap<String, ClassDecl>,
    pub interfaces: IndexMap<String, InterfaceDecl>,
    pub enums: IndexMap<String, EnumDecl>,
    pub types: IndexMap<String, TypeDecl>,
    pub functions: IndexMap<String, FunctionDecl>,
    pub constants: Vec<ConstantDecl>,
    /// Child modules in creation order. A directory and a namespace may
    /// share a name and stay distinct children.
    pub modules: Vec<ModuleId>,
}

impl Module {
    pub fn new(name: impl Into<String>, path: Vec<String>, repository: Option<String>) -> Self {
        Module {
            name: name.into(),
            path,
            repository,
            is_namespace: false,
            parent: None,
            classes: IndexMap::new(),
            interfaces: IndexMap::new(),
            enums: IndexMap::new(),
            types: IndexMap::new(),
            functions: IndexMap::new(),
            constants: Vec::new(),
            modules: Vec::new(),
        }
    }

    /// Number of declarations filed directly in this module.
    pub fn declaration_count(&self) -> usize {
        self.classes.len()
            + self.interfaces.len()
            + self.enums.len()
            + self.types.len()
            + self.functions.len()
            + self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declaration_count() == 0 && self.modules.is_empty()
    }
}
