use quill_syntax::NodeId;

use super::{auto_import, keyword, CompletionContext, Completions};

/// Adds completions for an expression or the start of a statement: every
/// name visible from `node`, the keywords, and names that can be imported
/// from other modules.
pub(super) fn complete_expr(result: &mut Completions, ctx: &CompletionContext<'_>, node: NodeId) {
    // An ellipsis is not followed by a name.
    if ctx.prior_text.ends_with("..") {
        return;
    }

    complete_scope_symbols(result, ctx, node);
    keyword::complete_keywords(result, ctx);
    if ctx.config.auto_import_completions {
        auto_import::complete_auto_imports(result, ctx);
    }
}

/// Adds the exported symbols of the scope that encloses `node` and of all of
/// its parents. Inner scopes are visited first, so their symbols shadow
/// symbols of the same name further out.
fn complete_scope_symbols(result: &mut Completions, ctx: &CompletionContext<'_>, node: NodeId) {
    let info = ctx.file.info();
    let scopes = ctx.file.scopes();

    let Some(scope) = ctx
        .tree()
        .ancestors(node)
        .filter_map(|node| info.scope(node))
        .find(|&scope| !scopes[scope].is_transient())
    else {
        log::trace!("no scope encloses {node:?}");
        return;
    };

    for scope in scopes.scope_chain(scope) {
        let scope = &scopes[scope];
        if scope.is_transient() {
            continue;
        }
        for (name, symbol) in scope.symbols.iter() {
            if scope.symbols.is_exported(name) {
                result.add_symbol(ctx, name, symbol);
            }
        }
    }
}
