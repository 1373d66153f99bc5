//! Symbols reported by the checker.

use crate::base::{FileId, NodeIndex};
use serde::{Deserialize, Serialize};

/// Symbol flags, a subset of the checker's `SymbolFlags`.
pub mod symbol_flags {
    pub const NONE: u32 = 0;
    pub const VARIABLE: u32 = 1 << 0;
    pub const PROPERTY: u32 = 1 << 1;
    pub const ENUM_MEMBER: u32 = 1 << 2;
    pub const FUNCTION: u32 = 1 << 3;
    pub const CLASS: u32 = 1 << 4;
    pub const INTERFACE: u32 = 1 << 5;
    pub const ENUM: u32 = 1 << 6;
    pub const TYPE_ALIAS: u32 = 1 << 7;
    pub const NAMESPACE_MODULE: u32 = 1 << 8;
    pub const VALUE_MODULE: u32 = 1 << 9;
    pub const METHOD: u32 = 1 << 10;
    pub const TYPE_PARAMETER: u32 = 1 << 11;
    pub const ALIAS: u32 = 1 << 12;
    /// Checker-internal placeholder (e.g. the `unknown` symbol produced for an
    /// unresolvable qualified access). Never a real declaration.
    pub const INTERNAL: u32 = 1 << 13;

    pub const MODULE: u32 = NAMESPACE_MODULE | VALUE_MODULE;
    pub const ENUM_LIKE: u32 = ENUM | ENUM_MEMBER;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A declaration site of a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub file: FileId,
    pub node: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub flags: u32,
    /// Containing symbol: the enum of an enum member, the namespace of a
    /// namespace export, ...
    #[serde(default)]
    pub parent: Option<SymbolId>,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    /// Module specifier for symbols coming from outside the project
    /// (`"react"`, `"typescript/lib"`)
    #[serde(default)]
    pub module_specifier: Option<String>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, flags: u32) -> Symbol {
        Symbol {
            name: name.into(),
            flags,
            parent: None,
            declarations: Vec::new(),
            module_specifier: None,
        }
    }

    pub fn with_parent(mut self, parent: SymbolId) -> Symbol {
        self.parent = Some(parent);
        self
    }

    pub fn declared_at(mut self, file: FileId, node: NodeIndex) -> Symbol {
        self.declarations.push(Declaration { file, node });
        self
    }

    pub fn from_module(mut self, specifier: impl Into<String>) -> Symbol {
        self.module_specifier = Some(specifier.into());
        self
    }

    #[inline]
    pub fn has_any_flags(&self, mask: u32) -> bool {
        self.flags & mask != 0
    }

    pub fn first_declaration(&self) -> Option<Declaration> {
        self.declarations.first().copied()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn alloc(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, sym)| (SymbolId(i as u32), sym))
    }

    /// Every symbol called `name`, in allocation order.
    pub fn named(&self, name: &str) -> Vec<SymbolId> {
        self.iter()
            .filter(|(_, sym)| sym.name == name)
            .map(|(id, _)| id)
            .collect()
    }
}
