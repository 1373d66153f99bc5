//! Source provenance: line/column positions and followable locators.

use crate::model::{LineCol, Loc};
use crate::resolver::Scope;
use tsdoc_syntax::NodeIndex;

/// `<repository>#L<n>` inside a namespace, `<repository>/<file>#L<n>`
/// elsewhere. `line` is zero-based.
pub fn locator(
    repository: Option<&str>,
    file_name: &str,
    in_namespace: bool,
    line: u32,
) -> Option<String> {
    let repository = repository?;
    let line = line + 1;
    if in_namespace {
        Some(format!("{repository}#L{line}"))
    } else {
        Some(format!("{repository}/{file_name}#L{line}"))
    }
}

/// Locator of a whole file, without a line suffix.
pub fn file_locator(repository: Option<&str>, file_name: &str) -> Option<String> {
    repository.map(|repository| format!("{repository}/{file_name}"))
}

/// Location of `node` in the scope's file; empty for synthetic nodes.
pub fn loc(scope: &Scope<'_>, node: NodeIndex) -> Loc {
    let Some(position) = scope.source.node_position(node) else {
        return Loc::default();
    };
    Loc {
        pos: Some(LineCol {
            line: position.line,
            col: position.character,
        }),
        source_file: locator(
            scope.repository.as_deref(),
            scope.source.base_name(),
            scope.in_namespace,
            position.line,
        ),
    }
}

#[cfg(test)]
#[path = "tests/location_tests.rs"]
mod location_tests;
