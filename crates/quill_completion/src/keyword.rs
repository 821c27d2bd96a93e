use super::{CompletionContext, Completions};

/// Every keyword that can start an expression or a statement.
pub(crate) const KEYWORDS: &[&str] = &[
    // Expression keywords
    "True", "False", "None", "and", "await", "or", "not", "is", "lambda", "yield",
    // Statement keywords
    "assert", "async", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "finally", "for", "from", "global", "if", "import", "in", "nonlocal", "pass", "raise",
    "return", "try", "while", "with",
];

/// Adds the keywords that start with the word in front of the cursor. Every
/// keyword matches if nothing was typed yet.
pub(crate) fn complete_keywords(result: &mut Completions, ctx: &CompletionContext<'_>) {
    if !ctx.config.keywords {
        return;
    }

    for &keyword in KEYWORDS
        .iter()
        .filter(|keyword| keyword.starts_with(ctx.prior_word))
    {
        result.add_keyword(keyword);
    }
}

/// Adds the only keyword that can follow, e.g. the `else` of a conditional
/// expression.
pub(crate) fn complete_single_keyword(result: &mut Completions, keyword: &'static str) {
    result.add_keyword(keyword);
}
