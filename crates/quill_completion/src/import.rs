use quill_syntax::{NodeId, NodeKind, SmolStr};
use rustc_hash::FxHashSet;

use super::{CompletionContext, Completions};
use crate::ModuleDescriptor;

/// Completes the next part of a dotted module path, e.g. `import os.pa$0`.
pub(super) fn complete_module_name(
    result: &mut Completions,
    ctx: &CompletionContext<'_>,
    module_name: NodeId,
) {
    let tree = ctx.tree();
    let NodeKind::ModuleName {
        leading_dots,
        name_parts,
        has_trailing_dot,
    } = tree.kind(module_name)
    else {
        return;
    };

    let descriptor = ModuleDescriptor {
        leading_dots: *leading_dots,
        name_parts: name_parts
            .iter()
            .filter_map(|&part| tree.name_value(part).cloned())
            .collect(),
        has_trailing_dot: *has_trailing_dot,
    };
    for name in ctx.project.module_name_completions(&descriptor) {
        result.add_module_name(ctx, &name);
    }
}

/// Completes the names a `from … import` statement can import: the symbols
/// of the imported module and its submodules. Returns `None` for wildcard
/// imports and for modules the analyzer knows nothing about.
pub(super) fn complete_import_from(
    result: &mut Completions,
    ctx: &CompletionContext<'_>,
    import_from: NodeId,
) -> Option<()> {
    let tree = ctx.tree();
    let NodeKind::ImportFrom {
        module,
        imports,
        is_wildcard,
    } = tree.kind(import_from)
    else {
        return None;
    };
    if *is_wildcard {
        return None;
    }
    let import = ctx.file.info().import(*module)?;

    // The entry that is being typed does not count as imported.
    let imported: FxHashSet<&SmolStr> = imports
        .iter()
        .filter(|&&entry| !tree.range(entry).contains_inclusive(ctx.offset))
        .filter_map(|&entry| match tree.kind(entry) {
            NodeKind::ImportFromAs { name, .. } => tree.name_value(*name),
            _ => None,
        })
        .collect();

    let symbols = import
        .resolved_paths
        .last()
        .and_then(|path| ctx.project.import_map().get(path));
    if let Some(symbols) = symbols {
        for (name, symbol) in symbols.iter() {
            if !imported.contains(name) && symbols.is_exported(name) {
                result.add_symbol(ctx, name, symbol);
            }
        }
    }

    for implicit in &import.implicit_imports {
        if !imported.contains(&implicit.name) {
            result.add_module_name(ctx, &implicit.name);
        }
    }
    Some(())
}
