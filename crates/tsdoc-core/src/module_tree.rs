//! Module tree builder.
//!
//! Directory modules are derived from a file's path below the base directory;
//! namespace modules are created the first time a `namespace` block is seen
//! and reused afterwards, which is how namespaces merge across files. Both
//! lookups are cached for the lifetime of one extraction run, in separate
//! tables: a namespace `N` and a directory `N/` under the same parent are two
//! modules.

use crate::model::{Module, ModuleId};
use rustc_hash::FxHashMap;
use std::ops::{Index, IndexMut};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use tsdoc_syntax::FileId;

/// Drop `.` components and fold `..` where possible, without touching the
/// filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Directory names between `base_dir` and the directory holding `file`.
///
/// `None` when the file does not live below `base_dir`.
pub fn module_segments(base_dir: &Path, file: &Path) -> Option<Vec<String>> {
    let base = normalize_path(base_dir);
    let file = normalize_path(file);
    let relative = file.strip_prefix(&base).ok()?;
    let dir = relative.parent().unwrap_or(Path::new(""));
    Some(
        dir.components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect(),
    )
}

/// Arena of modules rooted at the project module.
#[derive(Clone, Debug)]
pub struct ModuleTree {
    modules: Vec<Module>,
    file_modules: FxHashMap<FileId, ModuleId>,
    /// Directory modules keyed by (parent module, directory name)
    directories: FxHashMap<(ModuleId, String), ModuleId>,
    /// Namespace modules keyed by (parent module, namespace name)
    namespaces: FxHashMap<(ModuleId, String), ModuleId>,
}

impl ModuleTree {
    pub fn new(root_name: impl Into<String>, repository: Option<String>) -> Self {
        ModuleTree {
            modules: vec![Module::new(root_name, Vec::new(), repository)],
            file_modules: FxHashMap::default(),
            directories: FxHashMap::default(),
            namespaces: FxHashMap::default(),
        }
    }

    pub fn root(&self) -> &Module {
        &self.modules[ModuleId::ROOT.index()]
    }

    pub fn get(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(id.index())
    }

    pub fn get_mut(&mut self, id: ModuleId) -> Option<&mut Module> {
        self.modules.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &Module)> {
        self.modules
            .iter()
            .enumerate()
            .map(|(i, module)| (ModuleId(i as u32), module))
    }

    /// Follow a path of child names down from the root, taking the first
    /// child created under each name.
    pub fn find(&self, path: &[&str]) -> Option<&Module> {
        let mut current = self.get(ModuleId::ROOT)?;
        for name in path {
            current = current
                .modules
                .iter()
                .filter_map(|&child| self.get(child))
                .find(|child| child.name == *name)?;
        }
        Some(current)
    }

    /// Directory child `name` of `parent`, if one was created.
    pub fn directory(&self, parent: ModuleId, name: &str) -> Option<ModuleId> {
        self.directories.get(&(parent, name.to_string())).copied()
    }

    /// Namespace child `name` of `parent`, if one was created.
    pub fn namespace(&self, parent: ModuleId, name: &str) -> Option<ModuleId> {
        self.namespaces.get(&(parent, name.to_string())).copied()
    }

    /// Append a new child module under `parent`.
    fn add_child(
        &mut self,
        parent: ModuleId,
        name: &str,
        repository: Option<String>,
        is_namespace: bool,
    ) -> ModuleId {
        let Some(parent_module) = self.get(parent) else {
            return parent;
        };
        let mut path = parent_module.path.clone();
        path.push(name.to_string());

        let id = ModuleId(self.modules.len() as u32);
        let mut module = Module::new(name, path, repository);
        module.parent = Some(parent);
        module.is_namespace = is_namespace;
        self.modules.push(module);
        if let Some(parent_module) = self.get_mut(parent) {
            parent_module.modules.push(id);
        }
        id
    }

    // ============================================================================
    // Directory modules
    // ============================================================================

    /// Module a file's declarations are filed under, created on first use.
    pub fn module_for_file(&mut self, file: FileId, file_name: &str, base_dir: &Path) -> ModuleId {
        if let Some(&cached) = self.file_modules.get(&file) {
            return cached;
        }

        let segments = match module_segments(base_dir, Path::new(file_name)) {
            Some(segments) => segments,
            None => {
                warn!(
                    file = file_name,
                    base_dir = %base_dir.display(),
                    "file is outside the base directory; filing under the root module"
                );
                Vec::new()
            }
        };

        let mut current = ModuleId::ROOT;
        for segment in &segments {
            let key = (current, segment.clone());
            current = match self.directories.get(&key) {
                Some(&existing) => existing,
                None => {
                    let repository = self
                        .get(current)
                        .and_then(|parent| parent.repository.as_ref())
                        .map(|repo| format!("{repo}/{segment}"));
                    let id = self.add_child(current, segment, repository, false);
                    self.directories.insert(key, id);
                    id
                }
            };
        }

        debug!(file = file_name, module = ?segments, "resolved file module");
        self.file_modules.insert(file, current);
        current
    }

    // ============================================================================
    // Namespace modules
    // ============================================================================

    /// Namespace `name` under `parent`, created on first encounter.
    ///
    /// `repository` is only used when the namespace is created; later
    /// declarations reuse the identifier of the first one.
    pub fn enter_namespace(
        &mut self,
        parent: ModuleId,
        name: &str,
        repository: Option<String>,
    ) -> ModuleId {
        let key = (parent, name.to_string());
        if let Some(&cached) = self.namespaces.get(&key) {
            return cached;
        }

        let id = self.add_child(parent, name, repository, true);
        debug!(namespace = name, parent = parent.0, id = id.0, "created namespace module");
        self.namespaces.insert(key, id);
        id
    }
}

impl Index<ModuleId> for ModuleTree {
    type Output = Module;

    fn index(&self, id: ModuleId) -> &Module {
        &self.modules[id.index()]
    }
}

impl IndexMut<ModuleId> for ModuleTree {
    fn index_mut(&mut self, id: ModuleId) -> &mut Module {
        &mut self.modules[id.index()]
    }
}

#[cfg(test)]
#[path = "tests/module_tree_tests.rs"]
mod module_tree_tests;
