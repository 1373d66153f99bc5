//! Reference index: maps a symbol to a canonical cross-module reference.
//!
//! The resolver consults the index through the [`ReferenceIndex`] trait so the
//! canonical location of a symbol can come from anywhere (a prebuilt symbol
//! database, a test stand-in). [`DeclarationIndex`] derives it from the
//! checker: the declaring file's directory below the base directory, followed
//! by the enclosing namespaces.

use crate::config::ExtractConfig;
use crate::model::{DeclarationKind, Reference, ReferenceTarget};
use crate::module_tree::module_segments;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tracing::trace;
use tsdoc_syntax::{FileId, Symbol, SymbolId, TypeChecker, symbol_flags};

/// What the resolver asks the index about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolTarget<'a> {
    Symbol(SymbolId),
    /// Look up by name, e.g. the last segment of `A.B.C`
    Name(&'a str),
}

/// Where a lookup originates.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    pub checker: &'a dyn TypeChecker,
    pub file: FileId,
    /// Path of the module being filled in
    pub module_path: &'a [String],
}

pub trait ReferenceIndex {
    /// Canonical reference for `target`; `module_hint` is the dotted qualifier
    /// a name was written with (`A.B` for `A.B.C`).
    fn resolve_symbol(
        &self,
        target: SymbolTarget<'_>,
        context: &ResolveContext<'_>,
        module_hint: Option<&str>,
    ) -> Option<Reference>;

    /// Whether `name` is a platform builtin documented elsewhere.
    fn is_default(&self, name: &str) -> bool;
}

/// Declaration kind implied by symbol flags.
pub fn declaration_kind(symbol: &Symbol) -> Option<DeclarationKind> {
    let flags = symbol.flags;
    if flags & symbol_flags::CLASS != 0 {
        Some(DeclarationKind::Class)
    } else if flags & symbol_flags::INTERFACE != 0 {
        Some(DeclarationKind::Interface)
    } else if flags & symbol_flags::ENUM != 0 {
        Some(DeclarationKind::Enum)
    } else if flags & symbol_flags::TYPE_ALIAS != 0 {
        Some(DeclarationKind::TypeAlias)
    } else if flags & symbol_flags::FUNCTION != 0 {
        Some(DeclarationKind::Function)
    } else if flags & symbol_flags::VARIABLE != 0 {
        Some(DeclarationKind::Constant)
    } else if flags & symbol_flags::MODULE != 0 {
        Some(DeclarationKind::Module)
    } else {
        None
    }
}

/// Names of the namespaces enclosing `symbol`, outermost first.
pub fn namespace_chain(checker: &dyn TypeChecker, symbol: &Symbol) -> Vec<String> {
    let mut chain = Vec::new();
    let mut parent = symbol.parent;
    while let Some(id) = parent {
        let Some(sym) = checker.symbol(id) else {
            break;
        };
        if !sym.has_any_flags(symbol_flags::MODULE) {
            break;
        }
        chain.push(sym.name.clone());
        parent = sym.parent;
    }
    chain.reverse();
    chain
}

// =============================================================================
// DeclarationIndex
// =============================================================================

/// Default index built from the checker's declarations.
pub struct DeclarationIndex {
    base_dir: PathBuf,
    default_api_names: FxHashSet<String>,
    cache: RefCell<FxHashMap<SymbolId, Option<Reference>>>,
}

impl DeclarationIndex {
    pub fn new(base_dir: impl Into<PathBuf>, default_api_names: &[String]) -> Self {
        DeclarationIndex {
            base_dir: base_dir.into(),
            default_api_names: default_api_names.iter().cloned().collect(),
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn from_config(config: &ExtractConfig) -> Self {
        Self::new(&config.base_dir, &config.default_api_names)
    }

    fn resolve_id(&self, checker: &dyn TypeChecker, id: SymbolId) -> Option<Reference> {
        if let Some(cached) = self.cache.borrow().get(&id) {
            return cached.clone();
        }
        let resolved = self.compute(checker, id);
        trace!(symbol = id.0, ?resolved, "indexed symbol");
        self.cache.borrow_mut().insert(id, resolved.clone());
        resolved
    }

    fn compute(&self, checker: &dyn TypeChecker, id: SymbolId) -> Option<Reference> {
        let symbol = checker.symbol(id)?;
        if symbol.has_any_flags(symbol_flags::INTERNAL | symbol_flags::TYPE_PARAMETER) {
            return None;
        }

        let mut target = ReferenceTarget::new(symbol.name.clone(), Vec::new());
        target.declaration = declaration_kind(symbol);

        if let Some(specifier) = &symbol.module_specifier {
            target.external = true;
            target.path = vec![specifier.clone()];
            return Some(Reference::Declaration(target));
        }

        let declared_in = symbol
            .first_declaration()
            .and_then(|decl| checker.source_file(decl.file))
            .and_then(|sf| module_segments(&self.base_dir, Path::new(&sf.file_name)));
        match declared_in {
            Some(mut path) => {
                path.extend(namespace_chain(checker, symbol));
                target.path = path;
            }
            // No project declaration: ambient or outside the base directory
            None => target.external = true,
        }
        Some(Reference::Declaration(target))
    }

    /// Symbol called `name` whose namespace chain ends with `hint`. With a
    /// hint, an unmatched name yields `None`.
    fn lookup_name(
        &self,
        checker: &dyn TypeChecker,
        name: &str,
        hint: Option<&str>,
    ) -> Option<SymbolId> {
        let candidates: Vec<SymbolId> = checker
            .symbols_named(name)
            .into_iter()
            .filter(|&id| {
                checker.symbol(id).is_some_and(|sym| {
                    !sym.has_any_flags(symbol_flags::INTERNAL | symbol_flags::TYPE_PARAMETER)
                })
            })
            .collect();

        match hint {
            Some(hint) => candidates.into_iter().find(|&id| {
                checker.symbol(id).is_some_and(|sym| {
                    let chain = namespace_chain(checker, sym).join(".");
                    chain == hint || chain.ends_with(&format!(".{hint}"))
                })
            }),
            None => candidates.into_iter().next(),
        }
    }
}

impl ReferenceIndex for DeclarationIndex {
    fn resolve_symbol(
        &self,
        target: SymbolTarget<'_>,
        context: &ResolveContext<'_>,
        module_hint: Option<&str>,
    ) -> Option<Reference> {
        match target {
            SymbolTarget::Symbol(id) => self.resolve_id(context.checker, id),
            SymbolTarget::Name(name) => {
                let id = self.lookup_name(context.checker, name, module_hint)?;
                self.resolve_id(context.checker, id)
            }
        }
    }

    fn is_default(&self, name: &str) -> bool {
        self.default_api_names.contains(name)
    }
}

#[cfg(test)]
#[path = "tests/reference_tests.rs"]
mod reference_tests;
