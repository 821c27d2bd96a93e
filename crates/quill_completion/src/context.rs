mod analysis;

use hir::AnalyzedFile;
use quill_syntax::{NodeId, ParseTree, TextSize, TokenKind, Tokens};
use unicode_xid::UnicodeXID;

pub(crate) use self::analysis::CompletionAnalysis;
use crate::{
    project::{LazyProject, Project},
    CompletionConfig,
};

/// A `CompletionContext` is created to figure out where exactly the cursor is.
pub(crate) struct CompletionContext<'a> {
    pub file: &'a AnalyzedFile,
    pub offset: TextSize,

    /// The text of the current line up to the cursor.
    pub prior_text: &'a str,

    /// The identifier characters directly in front of the cursor. Candidates
    /// are filtered by how well they match this.
    pub prior_word: &'a str,
    pub project: LazyProject<'a>,
    pub config: &'a CompletionConfig,
}

impl<'a> CompletionContext<'a> {
    /// Tries to construct a new `CompletionContext` for the cursor at
    /// `offset`. Returns `None` if no completions should be offered at that
    /// position at all.
    pub(crate) fn new(
        file: &'a AnalyzedFile,
        offset: TextSize,
        project: &'a dyn Project,
        config: &'a CompletionConfig,
    ) -> Option<(Self, CompletionAnalysis)> {
        let text = file.text();
        let cursor = usize::from(offset);
        if cursor > text.len() || !text.is_char_boundary(cursor) {
            log::debug!("offset {offset:?} does not point into the file");
            return None;
        }

        let tree = file.tree();
        let node = seed_node(tree, text, offset)?;
        log::trace!("completion seed {:?} at {offset:?}", tree.kind(node));

        let line_start = usize::from(file.line_index().line_start(offset));
        let prior_text = &text[line_start..cursor];
        let prior_word = prior_word(prior_text);

        if is_within_comment_or_string(file.tokens(), prior_text, offset) {
            log::debug!("no completions inside a comment or a string");
            return None;
        }

        let analysis = analysis::analyze(tree, node)?;
        log::debug!("completing {analysis:?} with prior word {prior_word:?}");

        let context = CompletionContext {
            file,
            offset,
            prior_text,
            prior_word,
            project: LazyProject::new(project),
            config,
        };
        Some((context, analysis))
    }

    pub(crate) fn tree(&self) -> &'a ParseTree {
        self.file.tree()
    }
}

/// Finds the node that classification starts from. A plain lookup at the
/// offset often returns an ancestor of the token the cursor touches, e.g.
/// right after a dot. Scanning backwards on the current line until an
/// opening parenthesis finds that token; it is only used if it is deeper in
/// the tree than the node found at the offset itself.
fn seed_node(tree: &ParseTree, text: &str, offset: TextSize) -> Option<NodeId> {
    let initial = tree.find_node_at_offset(offset)?;
    let initial_depth = tree.depth(initial);

    for (index, c) in text[..usize::from(offset)].char_indices().rev() {
        if c == '(' || c == '\n' {
            break;
        }
        let node = match u32::try_from(index)
            .ok()
            .and_then(|index| tree.find_node_at_offset(index.into()))
        {
            Some(node) => node,
            None => continue,
        };
        if node != initial {
            if tree.depth(node) > initial_depth {
                return Some(node);
            }
            break;
        }
    }

    Some(initial)
}

/// Returns the trailing run of identifier characters of `prior_text`.
fn prior_word(prior_text: &str) -> &str {
    let start = prior_text
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_xid_continue())
        .last()
        .map_or(prior_text.len(), |(index, _)| index);
    &prior_text[start..]
}

fn is_within_comment_or_string(tokens: &Tokens, prior_text: &str, offset: TextSize) -> bool {
    if let Some(token) = tokens.token_at(offset) {
        if matches!(token.kind, TokenKind::String { .. }) && token.is_string_at(offset) {
            return true;
        }

        // The middle of a token is never part of a comment.
        if token.strictly_contains(offset) {
            return false;
        }
    }

    has_comment_marker(prior_text)
}

/// Returns true if `prior_text` contains a `#` that is not quoted.
fn has_comment_marker(prior_text: &str) -> bool {
    let mut quote = None;
    let mut escaped = false;
    for c in prior_text.chars() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(open) if c == open => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == '#' => return true,
            None => {}
        }
    }
    false
}
