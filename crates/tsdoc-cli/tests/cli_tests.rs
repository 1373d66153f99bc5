//! End-to-end runs of the driver over a program snapshot on disk.

use clap::Parser;
use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;
use tsdoc_cli::args::CliArgs;
use tsdoc_cli::driver;
use tsdoc_syntax::node::{FunctionData, InterfaceData, NodeData, TypeRefData};
use tsdoc_syntax::{JsDoc, NodeList, Program, SourceFile, Symbol, SyntaxKind, symbol_flags};

const REPO: &str = "https://example.com/geo/blob/main/src";

fn file_name(root: &Path, relative: &str) -> String {
    root.join(relative).to_string_lossy().into_owned()
}

/// `src/shapes/circle.ts` declares `Circle`; `src/index.ts` has `area(c: Circle): number`.
fn snapshot(root: &Path) -> Program {
    let mut circle = SourceFile::new(
        file_name(root, "src/shapes/circle.ts"),
        "/** A circle. */\nexport interface Circle {}",
    );
    let circle_name = circle.identifier("Circle");
    let modifiers = circle.modifiers(&[SyntaxKind::ExportKeyword]);
    let circle_decl = circle.node(
        SyntaxKind::InterfaceDeclaration,
        "export interface Circle {}",
        NodeData::Interface(InterfaceData {
            modifiers,
            name: circle_name,
            ..InterfaceData::default()
        }),
    );
    circle.push_statement(circle_decl);
    circle.attach_jsdoc(circle_decl, JsDoc::new("A circle."));

    let mut index = SourceFile::new(
        file_name(root, "src/index.ts"),
        "export function area(c: Circle): number {}",
    );
    let circle_ident = index.identifier("Circle");
    let circle_ref = index.node(
        SyntaxKind::TypeReference,
        "Circle",
        NodeData::TypeRef(TypeRefData {
            type_name: circle_ident,
            type_arguments: None,
        }),
    );
    let param = index.parameter("c: Circle", "c", circle_ref);
    let number = index.keyword(SyntaxKind::NumberKeyword, "number");
    let area_name = index.identifier("area");
    let modifiers = index.modifiers(&[SyntaxKind::ExportKeyword]);
    let area = index.node(
        SyntaxKind::FunctionDeclaration,
        "export function area(c: Circle): number {}",
        NodeData::Function(FunctionData {
            modifiers,
            name: area_name,
            parameters: NodeList::new(vec![param]),
            type_annotation: number,
            ..FunctionData::default()
        }),
    );
    index.push_statement(area);

    let mut program = Program::new();
    let circle_file = program.add_file(circle);
    let index_file = program.add_file(index);
    let circle_sym = program.add_symbol(
        Symbol::new("Circle", symbol_flags::INTERFACE).declared_at(circle_file, circle_decl),
    );
    program.bind(index_file, circle_ident, circle_sym);
    program
}

fn write_project(dir: &Path) {
    std::fs::write(dir.join("README.md"), "# geo\n").unwrap();
    std::fs::write(
        dir.join("tsdoc.json"),
        format!(
            r#"{{
                // picked up from the working directory
                name: "geo",
                baseDir: "src",
                readme: "README.md",
                repository: "{REPO}/",
                version: "1.0.0",
            }}"#
        ),
    )
    .unwrap();
    std::fs::write(dir.join("program.json"), snapshot(dir).to_json().unwrap()).unwrap();
}

#[test]
fn test_run_writes_documentation_file() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());

    let args = CliArgs::try_parse_from([
        "tsdoc",
        "--program",
        "program.json",
        "--out",
        "out/api.json",
        "--pretty",
    ])
    .unwrap();
    let outcome = driver::run(&args, temp_dir.path()).unwrap();
    assert_eq!(outcome.declarations, 2);
    let out_path = temp_dir.path().join("out/api.json");
    assert_eq!(outcome.output.as_deref(), Some(out_path.as_path()));

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(value["readme"], json!("# geo\n"));
    assert_eq!(value["version"], json!("1.0.0"));
    assert_eq!(value["repository"], json!(REPO));

    let module = &value["module"];
    assert_eq!(module["name"], json!("geo"));

    let area = &module["functions"][0];
    assert_eq!(area["name"], json!("area"));
    assert_eq!(area["isExported"], json!(true));
    let signature = &area["signatures"][0];
    assert_eq!(signature["returnType"], json!({ "kind": "number" }));
    assert_eq!(
        signature["parameters"][0]["type"],
        json!({
            "kind": "reference",
            "target": {
                "kind": "declaration",
                "name": "Circle",
                "path": ["shapes"],
                "external": false,
                "declaration": "interface"
            }
        })
    );
    assert_eq!(
        signature["loc"]["sourceFile"],
        json!(format!("{REPO}/index.ts#L1"))
    );

    let shapes = &module["modules"][0];
    assert_eq!(shapes["name"], json!("shapes"));
    assert_eq!(shapes["path"], json!(["shapes"]));
    let circle = &shapes["interfaces"][0];
    assert_eq!(circle["name"], json!("Circle"));
    assert_eq!(circle["jsdoc"], json!([{ "comment": "A circle." }]));
    assert_eq!(
        circle["loc"][0]["sourceFile"],
        json!(format!("{REPO}/shapes/circle.ts#L2"))
    );
}

#[test]
fn test_flags_override_project_file() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());

    let args = CliArgs::try_parse_from([
        "tsdoc",
        "--program",
        "program.json",
        "--out",
        "api.json",
        "--name",
        "renamed",
        "--base-dir",
        "src/shapes",
    ])
    .unwrap();
    driver::run(&args, temp_dir.path()).unwrap();

    let value: Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("api.json")).unwrap())
            .unwrap();
    let module = &value["module"];
    assert_eq!(module["name"], json!("renamed"));
    // circle.ts now sits at the root; index.ts is outside the base directory
    assert_eq!(module["interfaces"][0]["name"], json!("Circle"));
    assert_eq!(module["functions"][0]["name"], json!("area"));
    assert_eq!(module["modules"], json!([]));
}

#[test]
fn test_bad_snapshot_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path());
    std::fs::write(temp_dir.path().join("program.json"), "{ \"files\": 3 }").unwrap();

    let args = CliArgs::try_parse_from([
        "tsdoc",
        "--program",
        "program.json",
        "--out",
        "api.json",
    ])
    .unwrap();
    let err = driver::run(&args, temp_dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse program snapshot"));
    assert!(!temp_dir.path().join("api.json").exists());
}
