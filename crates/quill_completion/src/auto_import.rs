//! Offers symbols of modules that the current file has not imported yet.
//!
//! A suggestion is accompanied by the edit that imports it when the file
//! already has a `from … import` statement for the module: the name is added
//! to that statement, keeping the imported names sorted. Creating a new
//! import statement is left to the client.

use std::{collections::hash_map::Entry, path::Path};

use hir::AnalyzedFile;
use itertools::Itertools;
use quill_syntax::{NodeId, NodeKind, ParseTree, SmolStr};
use rustc_hash::FxHashMap;

use super::{CompletionContext, Completions};
use crate::AdditionalEdit;

/// An import of a module at the top level of the current file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImportStatement {
    /// The module as it was written, e.g. `..pkg.utils`
    module_name: SmolStr,

    /// The statement, if this is a `from … import` statement
    import_from: Option<NodeId>,
}

/// Adds completions for the exported symbols of all other modules whose
/// name starts with the word in front of the cursor.
pub(super) fn complete_auto_imports(result: &mut Completions, ctx: &CompletionContext<'_>) {
    let word = ctx.prior_word;
    if word.chars().count() < ctx.config.auto_import_min_prefix_length || word.starts_with('_') {
        return;
    }

    let imports = top_level_imports(ctx.file);
    let before = result.len();
    for (path, symbols) in ctx.project.module_symbols().iter() {
        if path == ctx.file.path() {
            continue;
        }

        for (name, symbol) in symbols.iter() {
            if !name.starts_with(word) || !symbols.is_exported(name) || result.contains(name) {
                continue;
            }

            // Names that a module imports itself are offered by their origin.
            match symbol.primary_declaration() {
                Some(declaration) if declaration.path.as_path() == path => {}
                _ => continue,
            }

            let import = imports.get(path);
            let module = match import {
                Some(import) => import.module_name.clone(),
                None => ctx.project.module_name(path),
            };
            let edits = import
                .and_then(|import| import.import_from)
                .map(|import_from| symbol_addition_edits(ctx.file, import_from, name))
                .unwrap_or_default();
            result.add_auto_import(ctx, name, symbol, module, edits);
        }
    }
    log::debug!("{} auto-import completion(s)", result.len() - before);
}

/// Finds the import statements at the top level of `file`, keyed by the path
/// of the module they import. A `from … import` statement is preferred over
/// an `import` statement, and among several of them the one with the
/// shortest module name is used.
fn top_level_imports(file: &AnalyzedFile) -> FxHashMap<&Path, ImportStatement> {
    let tree = file.tree();
    let mut imports = FxHashMap::default();
    for &statement in tree.children(tree.root()) {
        match tree.kind(statement) {
            NodeKind::StatementList => {
                for &statement in tree.children(statement) {
                    add_import(file, statement, &mut imports);
                }
            }
            _ => add_import(file, statement, &mut imports),
        }
    }
    imports
}

fn add_import<'a>(
    file: &'a AnalyzedFile,
    statement: NodeId,
    imports: &mut FxHashMap<&'a Path, ImportStatement>,
) {
    let tree = file.tree();
    let resolved_path = move |module: NodeId| {
        file.info()
            .import(module)
            .and_then(|import| import.resolved_path())
            .map(|path| path.as_path())
    };

    match tree.kind(statement) {
        NodeKind::Import => {
            for &entry in tree.children(statement) {
                let NodeKind::ImportAs { module, .. } = tree.kind(entry) else {
                    continue;
                };
                if let Some(path) = resolved_path(*module) {
                    imports.entry(path).or_insert_with(|| ImportStatement {
                        module_name: format_module_name(tree, *module),
                        import_from: None,
                    });
                }
            }
        }
        NodeKind::ImportFrom { module, .. } => {
            let Some(path) = resolved_path(*module) else {
                return;
            };
            let import = ImportStatement {
                module_name: format_module_name(tree, *module),
                import_from: Some(statement),
            };
            match imports.entry(path) {
                Entry::Occupied(mut entry) => {
                    let previous = entry.get();
                    if previous.import_from.is_none()
                        || previous.module_name.len() > import.module_name.len()
                    {
                        entry.insert(import);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(import);
                }
            }
        }
        _ => {}
    }
}

/// Renders a module path the way it was written, e.g. `..pkg.utils`.
fn format_module_name(tree: &ParseTree, module: NodeId) -> SmolStr {
    let NodeKind::ModuleName {
        leading_dots,
        name_parts,
        ..
    } = tree.kind(module)
    else {
        return SmolStr::default();
    };

    let dots = ".".repeat(*leading_dots as usize);
    let parts = name_parts
        .iter()
        .filter_map(|&part| tree.name_value(part))
        .join(".");
    SmolStr::from(dots + &parts)
}

/// Returns the edit that adds `name` to the `from … import` statement
/// `import_from`. The name is inserted after the last imported name that
/// sorts before it.
fn symbol_addition_edits(
    file: &AnalyzedFile,
    import_from: NodeId,
    name: &SmolStr,
) -> Vec<AdditionalEdit> {
    let tree = file.tree();
    let NodeKind::ImportFrom { imports, .. } = tree.kind(import_from) else {
        return Vec::new();
    };

    let entries: Vec<(NodeId, &SmolStr)> = imports
        .iter()
        .filter_map(|&entry| match tree.kind(entry) {
            NodeKind::ImportFromAs { name, .. } => {
                tree.name_value(*name).map(|name| (entry, name))
            }
            _ => None,
        })
        .collect();
    if entries.iter().any(|(_, imported)| *imported == name) {
        return Vec::new();
    }

    // TODO: a name that sorts before every imported name gets no edit yet,
    // it should be inserted in front of the first one.
    let Some((prior, _)) = entries
        .iter()
        .filter(|(_, imported)| *imported < name)
        .last()
    else {
        return Vec::new();
    };

    let offset = tree.range(*prior).end();
    vec![AdditionalEdit {
        offset,
        position: file.line_index().line_col(offset),
        new_text: format!(", {name}"),
    }]
}
