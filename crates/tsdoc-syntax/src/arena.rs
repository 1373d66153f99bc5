//! NodeArena: node storage, parent links and typed accessors.
//!
//! Nodes are built bottom-up (children before parents). `add_node` records the
//! parent link of every child it references, so upward walks (parameter →
//! function → variable statement) are O(depth).

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    /// Parent of each node, parallel to `nodes` (`NodeIndex::NONE` for roots)
    pub parents: Vec<NodeIndex>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ============================================================================
    // Node Creation
    // ============================================================================

    /// Append a node and link its children to it.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        for child in node.data.children() {
            if let Some(parent) = self.parents.get_mut(child.0 as usize) {
                *parent = idx;
            }
        }
        self.nodes.push(node);
        self.parents.push(NodeIndex::NONE);
        idx
    }

    /// Append a node built from its parts.
    pub fn add(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: NodeData) -> NodeIndex {
        self.add_node(Node::new(kind, pos, end, data))
    }

    /// Set `node_flags` on an existing node.
    pub fn set_flags(&mut self, idx: NodeIndex, flags: u16) {
        if let Some(node) = self.get_mut(idx) {
            node.flags |= flags;
        }
    }

    // ============================================================================
    // Node Access
    // ============================================================================

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Parent of a node, `NONE` for statements at the top of the tree.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        if index.is_none() {
            return NodeIndex::NONE;
        }
        self.parents
            .get(index.0 as usize)
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind)
    }

    /// Identifier text of an identifier node, or of the literal used as a name.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        match &node.data {
            NodeData::Identifier(data) => Some(&data.text),
            NodeData::Literal(data) => Some(&data.text),
            _ => None,
        }
    }

    /// fold a modifier list into `modifier_flags`
    pub fn modifier_flags(&self, modifiers: &Option<NodeList>) -> u32 {
        let Some(list) = modifiers else {
            return modifier_flags::NONE;
        };
        list.iter()
            .filter_map(|idx| self.get(idx))
            .fold(modifier_flags::NONE, |acc, node| {
                acc | modifier_flags::from_kind(node.kind)
            })
    }

    pub fn has_modifier(&self, modifiers: &Option<NodeList>, flag: u32) -> bool {
        self.modifier_flags(modifiers) & flag != 0
    }

    // ============================================================================
    // Typed Data Access
    // ============================================================================

    pub fn get_identifier<'a>(&'a self, node: &'a Node) -> Option<&'a IdentifierData> {
        match &node.data {
            NodeData::Identifier(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_literal<'a>(&'a self, node: &'a Node) -> Option<&'a LiteralData> {
        match &node.data {
            NodeData::Literal(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_qualified_name<'a>(&'a self, node: &'a Node) -> Option<&'a QualifiedNameData> {
        match &node.data {
            NodeData::QualifiedName(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_access_expr<'a>(&'a self, node: &'a Node) -> Option<&'a AccessExprData> {
        match &node.data {
            NodeData::Access(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_call_expr<'a>(&'a self, node: &'a Node) -> Option<&'a CallExprData> {
        match &node.data {
            NodeData::Call(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_class<'a>(&'a self, node: &'a Node) -> Option<&'a ClassData> {
        match &node.data {
            NodeData::Class(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_interface<'a>(&'a self, node: &'a Node) -> Option<&'a InterfaceData> {
        match &node.data {
            NodeData::Interface(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_enum<'a>(&'a self, node: &'a Node) -> Option<&'a EnumData> {
        match &node.data {
            NodeData::Enum(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_enum_member<'a>(&'a self, node: &'a Node) -> Option<&'a EnumMemberData> {
        match &node.data {
            NodeData::EnumMember(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_type_alias<'a>(&'a self, node: &'a Node) -> Option<&'a TypeAliasData> {
        match &node.data {
            NodeData::TypeAlias(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_function<'a>(&'a self, node: &'a Node) -> Option<&'a FunctionData> {
        match &node.data {
            NodeData::Function(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_variable_statement<'a>(
        &'a self,
        node: &'a Node,
    ) -> Option<&'a VariableStatementData> {
        match &node.data {
            NodeData::VariableStatement(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_variable_declaration<'a>(
        &'a self,
        node: &'a Node,
    ) -> Option<&'a VariableDeclarationData> {
        match &node.data {
            NodeData::VariableDeclaration(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_module<'a>(&'a self, node: &'a Node) -> Option<&'a ModuleData> {
        match &node.data {
            NodeData::Module(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_module_block<'a>(&'a self, node: &'a Node) -> Option<&'a ModuleBlockData> {
        match &node.data {
            NodeData::ModuleBlock(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_property_decl<'a>(&'a self, node: &'a Node) -> Option<&'a PropertyDeclData> {
        match &node.data {
            NodeData::PropertyDecl(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_index_signature<'a>(&'a self, node: &'a Node) -> Option<&'a IndexSignatureData> {
        match &node.data {
            NodeData::IndexSignature(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_parameter<'a>(&'a self, node: &'a Node) -> Option<&'a ParameterData> {
        match &node.data {
            NodeData::Parameter(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_type_parameter<'a>(&'a self, node: &'a Node) -> Option<&'a TypeParameterData> {
        match &node.data {
            NodeData::TypeParameter(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_heritage<'a>(&'a self, node: &'a Node) -> Option<&'a HeritageData> {
        match &node.data {
            NodeData::Heritage(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_expr_type_args<'a>(&'a self, node: &'a Node) -> Option<&'a ExprWithTypeArgsData> {
        match &node.data {
            NodeData::ExprWithTypeArgs(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_type_ref<'a>(&'a self, node: &'a Node) -> Option<&'a TypeRefData> {
        match &node.data {
            NodeData::TypeRef(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_composite_type<'a>(&'a self, node: &'a Node) -> Option<&'a CompositeTypeData> {
        match &node.data {
            NodeData::CompositeType(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_type_literal<'a>(&'a self, node: &'a Node) -> Option<&'a TypeLiteralData> {
        match &node.data {
            NodeData::TypeLiteral(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_array_type<'a>(&'a self, node: &'a Node) -> Option<&'a ArrayTypeData> {
        match &node.data {
            NodeData::ArrayType(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_type_operator<'a>(&'a self, node: &'a Node) -> Option<&'a TypeOperatorData> {
        match &node.data {
            NodeData::TypeOperator(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_wrapped_type<'a>(&'a self, node: &'a Node) -> Option<&'a WrappedTypeData> {
        match &node.data {
            NodeData::WrappedType(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_literal_type<'a>(&'a self, node: &'a Node) -> Option<&'a LiteralTypeData> {
        match &node.data {
            NodeData::LiteralType(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/arena_tests.rs"]
mod arena_tests;
