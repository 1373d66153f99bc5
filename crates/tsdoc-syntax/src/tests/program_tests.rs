use crate::*;

fn sample_program() -> (Program, FileId, NodeIndex, SymbolId) {
    let mut file = SourceFile::new("src/point.ts", "/** A point. */\nexport interface Point {}");
    let name = file.identifier("Point");
    let decl = file.node(
        SyntaxKind::InterfaceDeclaration,
        "export interface Point {}",
        node::NodeData::Interface(node::InterfaceData {
            name,
            ..Default::default()
        }),
    );
    file.push_statement(decl);
    file.attach_jsdoc(decl, JsDoc::new("A point."));

    let mut program = Program::new();
    let file_id = program.add_file(file);
    let sym = program.add_symbol(
        Symbol::new("Point", symbol_flags::INTERFACE).declared_at(file_id, decl),
    );
    program.bind(file_id, name, sym);
    (program, file_id, name, sym)
}

#[test]
fn test_program_answers_symbol_queries() {
    let (program, file_id, name, sym) = sample_program();

    assert_eq!(program.symbol_at_location(file_id, name), Some(sym));
    assert_eq!(program.symbol_at_location(file_id, NodeIndex::NONE), None);
    assert_eq!(program.symbol_at_location(FileId(9), name), None);
    assert_eq!(program.symbols_named("Point"), vec![sym]);
    assert!(program.symbols_named("Missing").is_empty());

    let symbol = program.symbol(sym).unwrap();
    assert!(symbol.has_any_flags(symbol_flags::INTERFACE));
    assert!(!symbol.has_any_flags(symbol_flags::MODULE));
}

#[test]
fn test_documentation_comes_from_attached_jsdoc() {
    let (program, file_id, _, _) = sample_program();
    let decl = program.file(file_id).unwrap().statements.nodes[0];
    let docs = program.documentation(file_id, decl);
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].comment.as_deref(), Some("A point."));
    assert!(program.documentation(file_id, NodeIndex(0)).is_empty());
}

#[test]
fn test_inferred_signature_lookup() {
    let (mut program, file_id, name, sym) = sample_program();
    program.set_signature(
        file_id,
        name,
        InferredSignature {
            return_type: Some(InferredType::named("Point", sym)),
        },
    );
    let sig = program.inferred_signature(file_id, name).unwrap();
    assert_eq!(sig.return_type.as_ref().unwrap().symbol, Some(sym));
}

#[test]
fn test_snapshot_loads_from_json() {
    let (program, file_id, name, sym) = sample_program();
    let json = program.to_json().unwrap();
    let loaded = Program::from_json(&json).unwrap();

    assert_eq!(loaded.symbol_at_location(file_id, name), Some(sym));
    let file = loaded.file(file_id).unwrap();
    assert_eq!(file.node_text(name), "Point");
    // line map is rebuilt lazily after loading
    assert_eq!(file.node_position(name).map(|p| p.line), Some(1));
}
