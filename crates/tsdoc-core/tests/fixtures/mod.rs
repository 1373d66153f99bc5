//! Hand-built syntax for extraction tests.
//!
//! Every helper locates its node by a snippet of the file text, so snippets of
//! declarations whose location is asserted must be unique in the file.

#![allow(dead_code)]

use tsdoc_syntax::node::*;
use tsdoc_syntax::{FileId, NodeIndex, NodeList, Program, SourceFile, SyntaxKind, node_flags};

pub fn list(nodes: Vec<NodeIndex>) -> Option<NodeList> {
    (!nodes.is_empty()).then(|| NodeList::new(nodes))
}

fn name_node(file: &mut SourceFile, name: &str) -> NodeIndex {
    if name.is_empty() {
        NodeIndex::NONE
    } else {
        file.identifier(name)
    }
}

/// Statement added to the file's top level.
pub fn top_level(file: &mut SourceFile, stmt: NodeIndex) -> NodeIndex {
    file.push_statement(stmt);
    stmt
}

pub fn program(files: Vec<SourceFile>) -> (Program, Vec<FileId>) {
    let mut program = Program::new();
    let ids = files.into_iter().map(|file| program.add_file(file)).collect();
    (program, ids)
}

// =============================================================================
// Types
// =============================================================================

/// `name` as a type reference; returns (reference, name identifier).
pub fn type_ref(file: &mut SourceFile, name: &str, args: Vec<NodeIndex>) -> (NodeIndex, NodeIndex) {
    let type_name = file.identifier(name);
    let reference = file.node(
        SyntaxKind::TypeReference,
        name,
        NodeData::TypeRef(TypeRefData {
            type_name,
            type_arguments: list(args),
        }),
    );
    (reference, type_name)
}

/// `left.right` in type position; returns (reference, qualified name, right identifier).
pub fn qualified_type_ref(
    file: &mut SourceFile,
    left: &str,
    right: &str,
) -> (NodeIndex, NodeIndex, NodeIndex) {
    let left_idx = file.identifier(left);
    let right_idx = file.identifier(right);
    let text = format!("{left}.{right}");
    let name = file.node(
        SyntaxKind::QualifiedName,
        &text,
        NodeData::QualifiedName(QualifiedNameData {
            left: left_idx,
            right: right_idx,
        }),
    );
    let reference = file.node(
        SyntaxKind::TypeReference,
        &text,
        NodeData::TypeRef(TypeRefData {
            type_name: name,
            type_arguments: None,
        }),
    );
    (reference, name, right_idx)
}

// =============================================================================
// Declarations
// =============================================================================

pub fn class(
    file: &mut SourceFile,
    snippet: &str,
    name: &str,
    modifiers: &[SyntaxKind],
    type_parameters: Vec<NodeIndex>,
    heritage: Vec<NodeIndex>,
    members: Vec<NodeIndex>,
) -> NodeIndex {
    let name = name_node(file, name);
    let modifiers = file.modifiers(modifiers);
    file.node(
        SyntaxKind::ClassDeclaration,
        snippet,
        NodeData::Class(ClassData {
            modifiers,
            name,
            type_parameters: list(type_parameters),
            heritage_clauses: list(heritage),
            members: NodeList::new(members),
        }),
    )
}

pub fn interface(
    file: &mut SourceFile,
    snippet: &str,
    name: &str,
    modifiers: &[SyntaxKind],
    heritage: Vec<NodeIndex>,
    members: Vec<NodeIndex>,
) -> NodeIndex {
    let name = name_node(file, name);
    let modifiers = file.modifiers(modifiers);
    file.node(
        SyntaxKind::InterfaceDeclaration,
        snippet,
        NodeData::Interface(InterfaceData {
            modifiers,
            name,
            type_parameters: None,
            heritage_clauses: list(heritage),
            members: NodeList::new(members),
        }),
    )
}

/// `extends`/`implements` clause over bare identifiers; returns (clause, expression identifiers).
pub fn heritage(
    file: &mut SourceFile,
    token: SyntaxKind,
    snippet: &str,
    names: &[&str],
) -> (NodeIndex, Vec<NodeIndex>) {
    let mut expressions = Vec::new();
    let mut entries = Vec::new();
    for name in names {
        let expression = file.identifier(name);
        expressions.push(expression);
        entries.push(file.node(
            SyntaxKind::ExpressionWithTypeArguments,
            name,
            NodeData::ExprWithTypeArgs(ExprWithTypeArgsData {
                expression,
                type_arguments: None,
            }),
        ));
    }
    let clause = file.node(
        SyntaxKind::HeritageClause,
        snippet,
        NodeData::Heritage(HeritageData {
            token,
            types: NodeList::new(entries),
        }),
    );
    (clause, expressions)
}

/// Any function-like node: declaration, method, accessor, constructor, method signature.
pub fn function(
    file: &mut SourceFile,
    kind: SyntaxKind,
    snippet: &str,
    name: &str,
    modifiers: &[SyntaxKind],
    parameters: Vec<NodeIndex>,
    return_type: NodeIndex,
) -> NodeIndex {
    let name = name_node(file, name);
    let modifiers = file.modifiers(modifiers);
    file.node(
        kind,
        snippet,
        NodeData::Function(FunctionData {
            modifiers,
            name,
            parameters: NodeList::new(parameters),
            type_annotation: return_type,
            ..FunctionData::default()
        }),
    )
}

pub fn property(
    file: &mut SourceFile,
    kind: SyntaxKind,
    snippet: &str,
    name: &str,
    modifiers: &[SyntaxKind],
    type_annotation: NodeIndex,
    initializer: NodeIndex,
) -> NodeIndex {
    let name = name_node(file, name);
    let modifiers = file.modifiers(modifiers);
    file.node(
        kind,
        snippet,
        NodeData::PropertyDecl(PropertyDeclData {
            modifiers,
            name,
            question_token: false,
            type_annotation,
            initializer,
        }),
    )
}

/// Enum whose members are located by their own names.
pub fn enumeration(
    file: &mut SourceFile,
    snippet: &str,
    name: &str,
    modifiers: &[SyntaxKind],
    members: &[&str],
) -> NodeIndex {
    let members = members
        .iter()
        .map(|member| {
            let name = file.identifier(member);
            file.node(
                SyntaxKind::EnumMember,
                member,
                NodeData::EnumMember(EnumMemberData {
                    name,
                    initializer: NodeIndex::NONE,
                }),
            )
        })
        .collect();
    let name = name_node(file, name);
    let modifiers = file.modifiers(modifiers);
    file.node(
        SyntaxKind::EnumDeclaration,
        snippet,
        NodeData::Enum(EnumData {
            modifiers,
            name,
            members: NodeList::new(members),
        }),
    )
}

pub fn type_alias(
    file: &mut SourceFile,
    snippet: &str,
    name: &str,
    modifiers: &[SyntaxKind],
    type_node: NodeIndex,
) -> NodeIndex {
    let name = name_node(file, name);
    let modifiers = file.modifiers(modifiers);
    file.node(
        SyntaxKind::TypeAliasDeclaration,
        snippet,
        NodeData::TypeAlias(TypeAliasData {
            modifiers,
            name,
            type_parameters: None,
            type_node,
        }),
    )
}

/// `export const <declarator>;` with a single declarator.
pub fn exported_const(
    file: &mut SourceFile,
    statement: &str,
    declarator: &str,
    name: &str,
    type_annotation: NodeIndex,
    initializer: NodeIndex,
) -> NodeIndex {
    let name = name_node(file, name);
    let decl = file.node(
        SyntaxKind::VariableDeclaration,
        declarator,
        NodeData::VariableDeclaration(VariableDeclarationData {
            name,
            type_annotation,
            initializer,
        }),
    );
    let modifiers = file.modifiers(&[SyntaxKind::ExportKeyword]);
    let stmt = file.node(
        SyntaxKind::VariableStatement,
        statement,
        NodeData::VariableStatement(VariableStatementData {
            modifiers,
            declarations: NodeList::new(vec![decl]),
        }),
    );
    file.arena.set_flags(stmt, node_flags::CONST);
    stmt
}

/// `namespace <name> { <statements> }`
pub fn namespace(
    file: &mut SourceFile,
    snippet: &str,
    name: &str,
    statements: Vec<NodeIndex>,
) -> NodeIndex {
    let body = file.synthetic(
        SyntaxKind::ModuleBlock,
        NodeData::ModuleBlock(ModuleBlockData {
            statements: NodeList::new(statements),
        }),
    );
    namespace_with_body(file, snippet, name, body)
}

/// Namespace whose body is another namespace (`namespace A.B`) or a block.
pub fn namespace_with_body(
    file: &mut SourceFile,
    snippet: &str,
    name: &str,
    body: NodeIndex,
) -> NodeIndex {
    let name = name_node(file, name);
    let decl = file.node(
        SyntaxKind::ModuleDeclaration,
        snippet,
        NodeData::Module(ModuleData {
            modifiers: None,
            name,
            body,
        }),
    );
    file.arena.set_flags(decl, node_flags::NAMESPACE);
    decl
}
