//! Serialized output shape: arrays only, tagged types, project metadata.

mod fixtures;

use fixtures::*;
use serde_json::{Value, json};
use tsdoc_core::{ExtractConfig, ModuleId, extract, serialize_module};
use tsdoc_syntax::{NodeIndex, SourceFile, SyntaxKind};

/// One declaration of every kind in the root module plus a namespace with a function.
fn sample() -> tsdoc_syntax::Program {
    let text = "export class C { m(): void {} }\n\
                export interface I {}\n\
                export enum E { A }\n\
                export type T = number;\n\
                export function g() {}\n\
                export const K = 1;\n\
                namespace NS { export function h() {} }\n";
    let mut file = SourceFile::new("src/all.ts", text);

    let void_kw = file.keyword(SyntaxKind::VoidKeyword, "void");
    let m = function(&mut file, SyntaxKind::MethodDeclaration, "m(): void {}", "m", &[], vec![], void_kw);
    let c = class(
        &mut file,
        "export class C { m(): void {} }",
        "C",
        &[SyntaxKind::ExportKeyword],
        vec![],
        vec![],
        vec![m],
    );
    top_level(&mut file, c);
    let i = interface(&mut file, "export interface I {}", "I", &[SyntaxKind::ExportKeyword], vec![], vec![]);
    top_level(&mut file, i);
    let e = enumeration(&mut file, "export enum E { A }", "E", &[SyntaxKind::ExportKeyword], &["A"]);
    top_level(&mut file, e);
    let number_kw = file.keyword(SyntaxKind::NumberKeyword, "number");
    let t = type_alias(&mut file, "export type T = number;", "T", &[SyntaxKind::ExportKeyword], number_kw);
    top_level(&mut file, t);
    let g = function(
        &mut file,
        SyntaxKind::FunctionDeclaration,
        "export function g() {}",
        "g",
        &[SyntaxKind::ExportKeyword],
        vec![],
        NodeIndex::NONE,
    );
    top_level(&mut file, g);
    let one = file.numeric_literal("1");
    let k = exported_const(&mut file, "export const K = 1;", "K = 1", "K", NodeIndex::NONE, one);
    top_level(&mut file, k);
    let h = function(
        &mut file,
        SyntaxKind::FunctionDeclaration,
        "export function h() {}",
        "h",
        &[SyntaxKind::ExportKeyword],
        vec![],
        NodeIndex::NONE,
    );
    let ns = namespace(&mut file, "namespace NS { export function h() {} }", "NS", vec![h]);
    top_level(&mut file, ns);

    program(vec![file]).0
}

fn config() -> ExtractConfig {
    let mut config = ExtractConfig::new("sample", "src");
    config.readme = Some("# Sample".to_string());
    config.version = Some("1.2.3".to_string());
    config
}

/// Named collections leave the serializer as arrays, at every depth.
fn assert_collections_are_arrays(module: &Value) {
    for key in ["classes", "interfaces", "enums", "types", "functions", "constants", "modules"] {
        assert!(
            module[key].is_array(),
            "`{key}` should be an array, got {}",
            module[key]
        );
    }
    for class in module["classes"].as_array().into_iter().flatten() {
        assert!(class["methods"].is_array());
    }
    for child in module["modules"].as_array().into_iter().flatten() {
        assert_collections_are_arrays(child);
    }
}

fn array_len(module: &Value, key: &str) -> usize {
    module[key].as_array().map_or(0, Vec::len)
}

#[test]
fn test_documentation_envelope() {
    let docs = extract(&sample(), &config()).unwrap();
    let value = docs.to_value().unwrap();

    assert_eq!(value["readme"], json!("# Sample"));
    assert_eq!(value["version"], json!("1.2.3"));
    assert_eq!(value["repository"], Value::Null);
    assert_eq!(value["homepage"], Value::Null);

    let module = &value["module"];
    assert_eq!(module["name"], json!("sample"));
    assert_eq!(module["path"], json!([]));
    assert_eq!(module["isNamespace"], json!(false));
    assert_collections_are_arrays(module);
}

#[test]
fn test_declaration_counts_survive_serialization() {
    let docs = extract(&sample(), &config()).unwrap();
    let serialized = docs.module();
    assert_eq!(serialized.declaration_count(), 7);

    let value = docs.to_value().unwrap();
    let module = &value["module"];
    let root_total: usize = ["classes", "interfaces", "enums", "types", "functions", "constants"]
        .iter()
        .map(|key| array_len(module, key))
        .sum();
    assert_eq!(root_total, docs.root().declaration_count());
    assert_eq!(root_total, 6);

    let namespace = &module["modules"][0];
    assert_eq!(namespace["name"], json!("NS"));
    assert_eq!(namespace["isNamespace"], json!(true));
    assert_eq!(array_len(namespace, "functions"), 1);
    assert_eq!(namespace["functions"][0]["name"], json!("h"));
}

#[test]
fn test_types_and_methods_are_tagged() {
    let docs = extract(&sample(), &config()).unwrap();
    let value = docs.to_value().unwrap();
    let module = &value["module"];

    assert_eq!(module["types"][0]["value"], json!({ "kind": "number" }));

    let method = &module["classes"][0]["methods"][0];
    assert_eq!(method["name"], json!("m"));
    assert_eq!(method["isGetter"], json!(false));
    assert_eq!(method["isStatic"], json!(false));
    assert_eq!(method["signatures"][0]["returnType"], json!({ "kind": "void" }));

    let constant = &module["constants"][0];
    assert_eq!(constant["name"], json!("K"));
    assert_eq!(constant["content"], json!("1"));
    assert_eq!(constant["type"], Value::Null);
    assert_eq!(constant["loc"]["pos"], json!({ "line": 5, "col": 13 }));

    let member = &module["enums"][0]["members"][0];
    assert_eq!(member["name"], json!("A"));
}

#[test]
fn test_serialize_module_by_id() {
    let docs = extract(&sample(), &config()).unwrap();
    let root = serialize_module(&docs.tree, ModuleId::ROOT).unwrap();
    assert_eq!(root.name, "sample");
    assert_eq!(root.modules.len(), 1);
    assert!(serialize_module(&docs.tree, ModuleId(99)).is_none());
}

#[test]
fn test_pretty_and_compact_output_agree() {
    let docs = extract(&sample(), &config()).unwrap();
    let compact: Value = serde_json::from_str(&docs.to_json_string(false).unwrap()).unwrap();
    let pretty: Value = serde_json::from_str(&docs.to_json_string(true).unwrap()).unwrap();
    assert_eq!(compact, pretty);
}
