//! A crate that provides completions based on the position of the cursor
//! (indicated as `$0` in the documentation and tests).
//! The [`completions`] function is the main entry point for computing the
//! completions.

mod auto_import;
mod config;
mod context;
mod dot;
mod expr;
mod import;
mod item;
mod keyword;
mod project;
mod render;
mod similarity;
#[cfg(test)]
mod test_utils;

use context::{CompletionAnalysis, CompletionContext};
use hir::{AnalyzedFile, Symbol};
use quill_syntax::{SmolStr, TextSize};
use rustc_hash::FxHashSet;

pub use crate::{
    config::CompletionConfig,
    item::{AdditionalEdit, Builder, CompletionItem, CompletionItemKind},
    project::{ImportResolver, ModuleDescriptor, Project, ProjectSnapshot},
};
use crate::{render::render_symbol, similarity::is_similar};

/// This is the main entry point for computing completions. This is a two step
/// process.
///
/// The first step is to determine the context of where the completion is
/// requested. This information is captured in the [`CompletionContext`]. The
/// context captures things like which node the cursor is in, what has been
/// typed so far and whether the cursor sits inside a string or a comment.
///
/// Second is to compute a set of completions based on the previously computed
/// context. We provide several methods for computing completions based on
/// different syntax contexts. For instance when writing `foo.$0` you want to
/// complete the members of `foo` and don't want the local variables of the
/// active scope.
///
/// Returns `None` if no completions should be offered at all, for instance
/// inside a string.
pub fn completions(
    file: &AnalyzedFile,
    offset: TextSize,
    project: &dyn Project,
    config: &CompletionConfig,
) -> Option<Completions> {
    let (context, analysis) = CompletionContext::new(file, offset, project, config)?;

    let mut result = Completions::default();
    match analysis {
        CompletionAnalysis::ModuleName(module_name) => {
            import::complete_module_name(&mut result, &context, module_name);
        }
        CompletionAnalysis::Keyword(keyword) => {
            keyword::complete_single_keyword(&mut result, keyword);
        }
        CompletionAnalysis::MemberAccess { receiver } => {
            dot::complete_member_access(&mut result, &context, receiver);
        }
        CompletionAnalysis::ImportFrom(import_from) => {
            import::complete_import_from(&mut result, &context, import_from)?;
        }
        CompletionAnalysis::Expression(node) | CompletionAnalysis::Statement(node) => {
            expr::complete_expr(&mut result, &context, node);
        }
    }

    log::debug!("{} completion(s) at {:?}", result.len(), offset);
    Some(result)
}

/// Represents an in-progress set of completions being built. Use the `add_..`
/// functions to quickly add completion items.
///
/// Items are kept in the order in which they were discovered. A label is only
/// ever added once; whatever was discovered first wins.
#[derive(Debug, Default)]
pub struct Completions {
    buf: Vec<CompletionItem>,
    labels: FxHashSet<SmolStr>,
}

impl From<Completions> for Vec<CompletionItem> {
    fn from(completions: Completions) -> Self {
        completions.buf
    }
}

impl Completions {
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompletionItem> {
        self.buf.iter()
    }

    /// Returns true if an item with the given label was already added.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Adds a raw `CompletionItem`
    fn add(&mut self, item: CompletionItem) {
        if self.labels.insert(item.label.clone()) {
            self.buf.push(item);
        }
    }

    /// Adds a completion item for a symbol if its name resembles what the
    /// user typed.
    fn add_symbol(&mut self, ctx: &CompletionContext<'_>, name: &SmolStr, symbol: &Symbol) {
        if self.contains(name) || !is_similar(ctx.prior_word, name) {
            return;
        }
        if let Some(builder) = render_symbol(name, symbol) {
            self.add(builder.finish());
        }
    }

    /// Adds a completion item for a symbol that has to be imported from
    /// `module` first.
    fn add_auto_import(
        &mut self,
        ctx: &CompletionContext<'_>,
        name: &SmolStr,
        symbol: &Symbol,
        module: SmolStr,
        edits: Vec<AdditionalEdit>,
    ) {
        if !is_similar(ctx.prior_word, name) {
            return;
        }
        if let Some(builder) = render_symbol(name, symbol) {
            self.add(builder.source_module(module).additional_edits(edits).finish());
        }
    }

    /// Adds a completion item for a module that is known only by its name.
    fn add_module_name(&mut self, ctx: &CompletionContext<'_>, name: &SmolStr) {
        if !self.contains(name) && is_similar(ctx.prior_word, name) {
            self.add(CompletionItem::builder(CompletionItemKind::Module, name.clone()).finish());
        }
    }

    fn add_keyword(&mut self, keyword: &'static str) {
        self.add(CompletionItem::builder(CompletionItemKind::Keyword, keyword).finish());
    }
}
