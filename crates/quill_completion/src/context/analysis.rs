use quill_syntax::{ErrorCategory, NodeId, NodeKind, ParseTree};

/// The kind of completion that applies at the cursor, together with the node
/// the completion is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompletionAnalysis {
    /// A dotted module path in an import statement, e.g. `import os.pa$0`
    ModuleName(NodeId),

    /// Only a single keyword can follow, e.g. the `in` of `[x for x $0`
    Keyword(&'static str),

    /// A member of the expression `receiver`, e.g. `receiver.$0`
    MemberAccess { receiver: NodeId },

    /// A name imported by a `from … import` statement
    ImportFrom(NodeId),

    /// Any expression
    Expression(NodeId),

    /// The start of a new statement in a block or at the top of the module
    Statement(NodeId),
}

/// Classifies the cursor position that `node` was found for. Returns `None`
/// if no completions apply.
pub(super) fn analyze(tree: &ParseTree, node: NodeId) -> Option<CompletionAnalysis> {
    // Completing inside a string never makes sense, however deep the node is.
    if tree
        .ancestors(node)
        .any(|node| matches!(tree.kind(node), NodeKind::StringList))
    {
        log::trace!("cursor is inside a string");
        return None;
    }

    // Incomplete syntax says the most about what the user is typing.
    let start = tree
        .ancestors(node)
        .find(|&node| matches!(tree.kind(node), NodeKind::Error { .. }))
        .unwrap_or(node);

    for node in tree.ancestors(start) {
        match classify(tree, node) {
            Step::Complete(analysis) => return Some(analysis),
            Step::Stop => return None,
            Step::Ascend => {}
        }
    }
    None
}

/// The outcome of looking at a single node on the way up.
enum Step {
    Complete(CompletionAnalysis),

    /// No completions apply
    Stop,

    /// The node says nothing, continue with its parent
    Ascend,
}

impl From<Option<CompletionAnalysis>> for Step {
    fn from(analysis: Option<CompletionAnalysis>) -> Self {
        analysis.map_or(Step::Stop, Step::Complete)
    }
}

fn classify(tree: &ParseTree, node: NodeId) -> Step {
    let analysis = match tree.kind(node) {
        NodeKind::ModuleName { .. } => CompletionAnalysis::ModuleName(node),
        NodeKind::Error { category, child } => {
            return classify_error(tree, node, *category, *child).into()
        }
        NodeKind::MemberAccess { left, .. } => CompletionAnalysis::MemberAccess { receiver: *left },
        NodeKind::Name { .. } => return classify_name(tree, node).into(),
        NodeKind::ImportFrom { .. } => CompletionAnalysis::ImportFrom(node),

        // Typing a dot after a number starts a fraction.
        NodeKind::Number | NodeKind::StringList | NodeKind::String => return Step::Stop,

        NodeKind::Constant
        | NodeKind::Call
        | NodeKind::Index
        | NodeKind::BinaryOperation
        | NodeKind::UnaryOperation
        | NodeKind::Ternary
        | NodeKind::Lambda
        | NodeKind::ListComprehension
        | NodeKind::List
        | NodeKind::Tuple
        | NodeKind::Dictionary
        | NodeKind::Set => CompletionAnalysis::Expression(node),

        NodeKind::Module | NodeKind::Suite => CompletionAnalysis::Statement(node),

        NodeKind::StatementList
        | NodeKind::Class
        | NodeKind::Function
        | NodeKind::Parameter
        | NodeKind::Decorator
        | NodeKind::If
        | NodeKind::For
        | NodeKind::While
        | NodeKind::Return
        | NodeKind::Pass
        | NodeKind::Assignment
        | NodeKind::Import
        | NodeKind::ImportAs { .. }
        | NodeKind::ImportFromAs { .. }
        | NodeKind::Argument
        | NodeKind::ComprehensionFor
        | NodeKind::ComprehensionIf => return Step::Ascend,
    };
    Step::Complete(analysis)
}

fn classify_error(
    tree: &ParseTree,
    node: NodeId,
    category: ErrorCategory,
    child: Option<NodeId>,
) -> Option<CompletionAnalysis> {
    match category {
        ErrorCategory::MissingIn => Some(CompletionAnalysis::Keyword("in")),
        ErrorCategory::MissingElse => Some(CompletionAnalysis::Keyword("else")),
        ErrorCategory::MissingExpression | ErrorCategory::MissingDecoratorCallName => {
            Some(CompletionAnalysis::Expression(node))
        }
        ErrorCategory::MissingMemberAccessName => child
            .filter(|&child| tree.kind(child).is_expression())
            .map(|receiver| CompletionAnalysis::MemberAccess { receiver }),
        ErrorCategory::MissingIndexOrSlice
        | ErrorCategory::MissingCallCloseParen
        | ErrorCategory::MissingTupleCloseParen
        | ErrorCategory::MissingListCloseBracket
        | ErrorCategory::MissingFunctionParameterList => None,
    }
}

fn classify_name(tree: &ParseTree, node: NodeId) -> Option<CompletionAnalysis> {
    let Some(parent) = tree.parent(node) else {
        return Some(CompletionAnalysis::Expression(node));
    };

    match tree.kind(parent) {
        NodeKind::ModuleName { .. } => Some(CompletionAnalysis::ModuleName(parent)),
        NodeKind::ImportAs { alias, .. } if *alias == Some(node) => None,
        NodeKind::ImportFromAs { name, .. } => {
            if *name != node {
                // A new name is being introduced by `as`.
                return None;
            }
            let import_from = tree.parent(parent)?;
            matches!(tree.kind(import_from), NodeKind::ImportFrom { .. })
                .then_some(CompletionAnalysis::ImportFrom(import_from))
        }
        NodeKind::MemberAccess { left, member } if *member == node => {
            Some(CompletionAnalysis::MemberAccess { receiver: *left })
        }
        _ => Some(CompletionAnalysis::Expression(node)),
    }
}
