use crate::location::{file_locator, loc, locator};
use crate::resolver::Scope;
use tsdoc_syntax::{FileId, NodeData, SourceFile, SyntaxKind};

const REPO: &str = "https://example.com/p/blob/main/src";

#[test]
fn test_locator_forms() {
    assert_eq!(
        locator(Some(REPO), "a.ts", false, 0).as_deref(),
        Some("https://example.com/p/blob/main/src/a.ts#L1")
    );
    assert_eq!(
        locator(Some("https://example.com/p/blob/main/src/a.ts"), "a.ts", true, 4).as_deref(),
        Some("https://example.com/p/blob/main/src/a.ts#L5")
    );
    assert_eq!(locator(None, "a.ts", false, 0), None);
}

#[test]
fn test_file_locator() {
    assert_eq!(
        file_locator(Some(REPO), "b.ts").as_deref(),
        Some("https://example.com/p/blob/main/src/b.ts")
    );
    assert_eq!(file_locator(None, "b.ts"), None);
}

#[test]
fn test_loc_of_located_and_synthetic_nodes() {
    let mut file = SourceFile::new("src/a.ts", "\n\nexport class Foo {}");
    let name = file.identifier("Foo");
    let synthetic = file.synthetic(SyntaxKind::ModuleBlock, NodeData::None);

    let mut scope = Scope::new(FileId(0), &file);
    scope.repository = Some(REPO.to_string());

    let located = loc(&scope, name);
    let pos = located.pos.unwrap();
    assert_eq!((pos.line, pos.col), (2, 13));
    assert_eq!(
        located.source_file.as_deref(),
        Some("https://example.com/p/blob/main/src/a.ts#L3")
    );

    assert!(loc(&scope, synthetic).is_empty());
}
