//! Two-phase extraction driver.
//!
//! Every file must be prepared before any file is visited: the visit phase
//! looks up skeletons by name, and a type may reference a declaration from a
//! file later in the list. The phase is part of the driver's type, so the
//! order cannot be broken by accident:
//!
//! ```text
//! Extractor<Preparing> --finish_prepare--> Extractor<Visiting> --finish--> Documentation
//! ```

use crate::collector::{Collector, Phase};
use crate::config::ExtractConfig;
use crate::error::{ExtractError, Result};
use crate::module_tree::ModuleTree;
use crate::reference::{DeclarationIndex, ReferenceIndex};
use crate::resolver::TypeResolver;
use crate::serializer::Documentation;
use std::marker::PhantomData;
use tracing::debug;
use tsdoc_syntax::{FileId, Program, TypeChecker};

/// Skeletons are being created.
#[derive(Debug)]
pub struct Preparing;

/// Skeletons are being filled in.
#[derive(Debug)]
pub struct Visiting;

pub struct Extractor<'a, P = Preparing> {
    checker: &'a dyn TypeChecker,
    config: &'a ExtractConfig,
    resolver: TypeResolver<'a>,
    tree: ModuleTree,
    _phase: PhantomData<P>,
}

impl<'a, P> Extractor<'a, P> {
    pub fn tree(&self) -> &ModuleTree {
        &self.tree
    }

    fn run(&mut self, file: FileId, phase: Phase) -> Result<()> {
        let checker = self.checker;
        let source = checker
            .source_file(file)
            .ok_or(ExtractError::UnknownFile(file))?;
        let module = self
            .tree
            .module_for_file(file, &source.file_name, &self.config.base_dir);
        Collector::new(&self.resolver, &mut self.tree, file, source, module)
            .walk_statements(&source.statements, phase)
    }

    fn into_phase<Q>(self) -> Extractor<'a, Q> {
        Extractor {
            checker: self.checker,
            config: self.config,
            resolver: self.resolver,
            tree: self.tree,
            _phase: PhantomData,
        }
    }
}

impl<'a> Extractor<'a, Preparing> {
    pub fn new(
        checker: &'a dyn TypeChecker,
        index: &'a dyn ReferenceIndex,
        config: &'a ExtractConfig,
    ) -> Self {
        Extractor {
            checker,
            config,
            resolver: TypeResolver::new(checker, index),
            tree: ModuleTree::new(config.name.clone(), config.repository.clone()),
            _phase: PhantomData,
        }
    }

    /// Create the skeletons declared in `file`.
    #[tracing::instrument(level = "debug", skip(self, file), fields(file = file.0))]
    pub fn prepare_file(&mut self, file: FileId) -> Result<()> {
        self.run(file, Phase::Prepare)
    }

    /// Close the prepare phase; no more skeletons can be created.
    pub fn finish_prepare(self) -> Extractor<'a, Visiting> {
        debug!(modules = self.tree.len(), "prepare phase complete");
        self.into_phase()
    }
}

impl<'a> Extractor<'a, Visiting> {
    /// Resolve and fill in the declarations of `file`.
    #[tracing::instrument(level = "debug", skip(self, file), fields(file = file.0))]
    pub fn visit_file(&mut self, file: FileId) -> Result<()> {
        self.run(file, Phase::Visit)
    }

    pub fn finish(self) -> Documentation {
        debug!(modules = self.tree.len(), "visit phase complete");
        Documentation {
            readme: self.config.readme.clone(),
            repository: self.config.repository.clone(),
            homepage: self.config.homepage.clone(),
            version: self.config.version.clone(),
            tree: self.tree,
        }
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Run both phases over `files`, in order.
pub fn extract_files(
    checker: &dyn TypeChecker,
    index: &dyn ReferenceIndex,
    files: &[FileId],
    config: &ExtractConfig,
) -> Result<Documentation> {
    let _span = tracing::info_span!("extract", files = files.len()).entered();

    let mut extractor = Extractor::new(checker, index, config);
    for &file in files {
        extractor.prepare_file(file)?;
    }
    let mut extractor = extractor.finish_prepare();
    for &file in files {
        extractor.visit_file(file)?;
    }
    Ok(extractor.finish())
}

/// Extract every file of a frontend snapshot with the default reference index.
pub fn extract(program: &Program, config: &ExtractConfig) -> Result<Documentation> {
    let index = DeclarationIndex::from_config(config);
    extract_files(program, &index, &program.file_ids(), config)
}
