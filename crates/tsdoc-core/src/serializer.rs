//! Serializer: the finished module tree as array-only JSON.
//!
//! Named collections are `IndexMap`s internally; on output each becomes an
//! array of its values in insertion order, and child modules are inlined
//! recursively so the result is acyclic.

use crate::model::{
    ClassDecl, ConstantDecl, EnumDecl, FunctionDecl, InterfaceDecl, Module, ModuleId, TypeDecl,
};
use crate::module_tree::ModuleTree;
use indexmap::IndexMap;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// `serialize_with` helper emitting a map's values as a sequence.
pub(crate) fn map_values<S, K, V>(map: &IndexMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    serializer.collect_seq(map.values())
}

/// Borrowed, array-only view of one module and its descendants.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedModule<'t> {
    pub name: &'t str,
    pub path: &'t [String],
    pub repository: Option<&'t str>,
    pub is_namespace: bool,
    pub classes: Vec<&'t ClassDecl>,
    pub interfaces: Vec<&'t InterfaceDecl>,
    pub enums: Vec<&'t EnumDecl>,
    pub types: Vec<&'t TypeDecl>,
    pub functions: Vec<&'t FunctionDecl>,
    pub constants: &'t [ConstantDecl],
    pub modules: Vec<SerializedModule<'t>>,
}

impl<'t> SerializedModule<'t> {
    fn new(tree: &'t ModuleTree, module: &'t Module) -> Self {
        SerializedModule {
            name: &module.name,
            path: &module.path,
            repository: module.repository.as_deref(),
            is_namespace: module.is_namespace,
            classes: module.classes.values().collect(),
            interfaces: module.interfaces.values().collect(),
            enums: module.enums.values().collect(),
            types: module.types.values().collect(),
            functions: module.functions.values().collect(),
            constants: &module.constants,
            modules: module
                .modules
                .iter()
                .filter_map(|&child| tree.get(child))
                .map(|child| SerializedModule::new(tree, child))
                .collect(),
        }
    }

    /// Declarations in this module and every module below it.
    pub fn declaration_count(&self) -> usize {
        self.classes.len()
            + self.interfaces.len()
            + self.enums.len()
            + self.types.len()
            + self.functions.len()
            + self.constants.len()
            + self
                .modules
                .iter()
                .map(SerializedModule::declaration_count)
                .sum::<usize>()
    }
}

/// Array-only view of module `id`; `None` for an id outside the tree.
pub fn serialize_module(tree: &ModuleTree, id: ModuleId) -> Option<SerializedModule<'_>> {
    tree.get(id).map(|module| SerializedModule::new(tree, module))
}

// =============================================================================
// Documentation
// =============================================================================

/// The extraction result: project metadata plus the finished module tree.
#[derive(Clone, Debug)]
pub struct Documentation {
    pub readme: Option<String>,
    pub repository: Option<String>,
    pub homepage: Option<String>,
    pub version: Option<String>,
    pub tree: ModuleTree,
}

impl Documentation {
    pub fn root(&self) -> &Module {
        self.tree.root()
    }

    pub fn module(&self) -> SerializedModule<'_> {
        SerializedModule::new(&self.tree, self.tree.root())
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_string(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl Serialize for Documentation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Documentation", 5)?;
        state.serialize_field("readme", &self.readme)?;
        state.serialize_field("repository", &self.repository)?;
        state.serialize_field("homepage", &self.homepage)?;
        state.serialize_field("version", &self.version)?;
        state.serialize_field("module", &self.module())?;
        state.end()
    }
}
