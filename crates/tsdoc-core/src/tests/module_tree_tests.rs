use crate::model::ModuleId;
use crate::module_tree::{ModuleTree, module_segments, normalize_path};
use std::path::{Path, PathBuf};
use tsdoc_syntax::FileId;

#[test]
fn test_normalize_path_folds_dots() {
    assert_eq!(normalize_path(Path::new("a/./b/../c")), PathBuf::from("a/c"));
    assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
}

#[test]
fn test_module_segments() {
    let base = Path::new("src");
    assert_eq!(
        module_segments(base, Path::new("src/a/b/c.ts")),
        Some(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(module_segments(base, Path::new("src/index.ts")), Some(Vec::new()));
    assert_eq!(
        module_segments(Path::new("./src"), Path::new("src/./a/../b/f.ts")),
        Some(vec!["b".to_string()])
    );
    assert_eq!(module_segments(base, Path::new("lib/x.ts")), None);
}

#[test]
fn test_directory_modules_nest_and_extend_repository() {
    let mut tree = ModuleTree::new("proj", Some("https://r/src".to_string()));
    let base = Path::new("src");

    let nested = tree.module_for_file(FileId(0), "src/geo/shapes/circle.ts", base);
    let module = &tree[nested];
    assert_eq!(module.path, ["geo", "shapes"]);
    assert_eq!(module.name, "shapes");
    assert_eq!(module.repository.as_deref(), Some("https://r/src/geo/shapes"));
    assert!(!module.is_namespace);

    let geo = tree.find(&["geo"]).unwrap();
    assert_eq!(geo.repository.as_deref(), Some("https://r/src/geo"));
    assert_eq!(geo.parent, Some(ModuleId::ROOT));

    // a sibling file reuses the same module
    let sibling = tree.module_for_file(FileId(1), "src/geo/shapes/square.ts", base);
    assert_eq!(sibling, nested);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_file_outside_base_dir_goes_to_root() {
    let mut tree = ModuleTree::new("proj", None);
    let id = tree.module_for_file(FileId(0), "vendor/lib.ts", Path::new("src"));
    assert_eq!(id, ModuleId::ROOT);
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_namespace_is_created_once_per_parent() {
    let mut tree = ModuleTree::new("proj", None);
    let first = tree.enter_namespace(ModuleId::ROOT, "N", Some("https://r/src/a.ts".to_string()));
    let again = tree.enter_namespace(ModuleId::ROOT, "N", Some("https://r/src/b.ts".to_string()));
    assert_eq!(first, again);
    assert!(tree[first].is_namespace);
    assert_eq!(tree[first].repository.as_deref(), Some("https://r/src/a.ts"));

    let nested = tree.enter_namespace(first, "N", None);
    assert_ne!(nested, first);
    assert_eq!(tree[nested].path, ["N", "N"]);
    assert_eq!(tree.find(&["N", "N"]).map(|m| m.path.len()), Some(2));
}

#[test]
fn test_namespace_and_directory_with_one_name_are_separate_modules() {
    let base = Path::new("src");

    // directory first
    let mut tree = ModuleTree::new("proj", Some("https://r/src".to_string()));
    let directory = tree.module_for_file(FileId(0), "src/N/helper.ts", base);
    let namespace = tree.enter_namespace(ModuleId::ROOT, "N", Some("https://r/src/index.ts".to_string()));
    assert_ne!(directory, namespace);
    assert!(!tree[directory].is_namespace);
    assert!(tree[namespace].is_namespace);
    assert_eq!(tree[directory].repository.as_deref(), Some("https://r/src/N"));
    assert_eq!(tree.directory(ModuleId::ROOT, "N"), Some(directory));
    assert_eq!(tree.namespace(ModuleId::ROOT, "N"), Some(namespace));
    assert_eq!(tree.root().modules, [directory, namespace]);

    // namespace first
    let mut tree = ModuleTree::new("proj", Some("https://r/src".to_string()));
    let namespace = tree.enter_namespace(ModuleId::ROOT, "N", Some("https://r/src/index.ts".to_string()));
    let directory = tree.module_for_file(FileId(0), "src/N/helper.ts", base);
    assert_ne!(directory, namespace);
    assert!(!tree[directory].is_namespace);
    assert_eq!(tree[namespace].repository.as_deref(), Some("https://r/src/index.ts"));
    assert_eq!(tree.root().modules, [namespace, directory]);
    // a later file in the directory lands in the directory module
    assert_eq!(tree.module_for_file(FileId(1), "src/N/other.ts", base), directory);
}
