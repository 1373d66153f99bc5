use crate::node::*;
use crate::{NodeIndex, NodeList, SourceFile, SyntaxKind};

#[test]
fn test_add_node_links_children_to_parent() {
    let mut file = SourceFile::new("a.ts", "function f(x: string) {}");
    let string_kw = file.keyword(SyntaxKind::StringKeyword, "string");
    let param = file.parameter("x: string", "x", string_kw);
    let name = file.identifier("f");
    let func = file.node(
        SyntaxKind::FunctionDeclaration,
        "function f(x: string) {}",
        NodeData::Function(FunctionData {
            name,
            parameters: NodeList::new(vec![param]),
            ..FunctionData::default()
        }),
    );

    assert_eq!(file.arena.parent(param), func);
    assert_eq!(file.arena.parent(string_kw), param);
    assert_eq!(file.arena.parent(func), NodeIndex::NONE);
    assert_eq!(file.arena.parent(NodeIndex::NONE), NodeIndex::NONE);
}

#[test]
fn test_node_text_uses_source_span() {
    let mut file = SourceFile::new("a.ts", "type A = Map<string, number>;");
    let idx = file.node(SyntaxKind::MappedType, "Map<string, number>", NodeData::None);
    assert_eq!(file.node_text(idx), "Map<string, number>");
}

#[test]
fn test_missing_snippet_yields_synthetic_node() {
    let mut file = SourceFile::new("a.ts", "let x = 1;");
    let idx = file.identifier("nowhere");
    let node = file.arena.get(idx).unwrap();
    assert!(node.is_synthetic());
    assert_eq!(file.node_text(idx), "");
    assert_eq!(file.node_position(idx), None);
}

#[test]
fn test_locate_nth_occurrence() {
    let file = SourceFile::new("a.ts", "a | a | a");
    assert_eq!(file.locate("a"), (0, 1));
    assert_eq!(file.locate_nth("a", 2), (8, 9));
    assert_eq!(
        file.locate_nth("a", 3),
        (Node::SYNTHETIC_POS, Node::SYNTHETIC_POS)
    );
}

#[test]
fn test_modifier_flags_fold_keywords() {
    let mut file = SourceFile::new("a.ts", "");
    let modifiers = file.modifiers(&[
        SyntaxKind::PrivateKeyword,
        SyntaxKind::StaticKeyword,
        SyntaxKind::ReadonlyKeyword,
    ]);
    let flags = file.arena.modifier_flags(&modifiers);
    assert_eq!(
        flags,
        modifier_flags::PRIVATE | modifier_flags::STATIC | modifier_flags::READONLY
    );
    assert!(!file.arena.has_modifier(&modifiers, modifier_flags::EXPORT));
    assert_eq!(file.arena.modifier_flags(&None), modifier_flags::NONE);
}

#[test]
fn test_string_literal_stores_unquoted_value() {
    let mut file = SourceFile::new("a.ts", "const s = 'hello';");
    let lit = file.string_literal("'hello'");
    assert_eq!(file.arena.identifier_text(lit), Some("hello"));
    assert_eq!(file.node_text(lit), "'hello'");
}

#[test]
fn test_typed_accessors_reject_other_kinds() {
    let mut file = SourceFile::new("a.ts", "Foo");
    let ident = file.identifier("Foo");
    let node = file.arena.get(ident).unwrap();
    assert!(file.arena.get_identifier(node).is_some());
    assert!(file.arena.get_class(node).is_none());
    assert!(file.arena.get_type_ref(node).is_none());
}
