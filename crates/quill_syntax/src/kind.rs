use smol_str::SmolStr;

use crate::NodeId;

/// The kind of a node in a [`ParseTree`](crate::ParseTree).
///
/// Kinds that the analysis layers need to look into carry the ids of their
/// significant children. All other kinds are plain tags, their children are
/// only reachable through [`ParseTree::children`](crate::ParseTree::children).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Module,
    Suite,
    StatementList,
    Class,
    Function,
    Parameter,
    Decorator,
    If,
    For,
    While,
    Return,
    Pass,
    Assignment,

    /// `import a.b, c as d`
    Import,

    /// A single entry of an `import` statement, e.g. `c as d`
    ImportAs {
        module: NodeId,
        alias: Option<NodeId>,
    },

    /// `from .a import b, c as d`
    ImportFrom {
        module: NodeId,
        imports: Vec<NodeId>,
        is_wildcard: bool,
    },

    /// A single entry of a `from ... import` statement, e.g. `c as d`
    ImportFromAs {
        name: NodeId,
        alias: Option<NodeId>,
    },

    /// The dotted module path of an import, e.g. `..a.b`
    ModuleName {
        leading_dots: u32,
        name_parts: Vec<NodeId>,
        has_trailing_dot: bool,
    },

    /// Incomplete syntax. `child` is the partial expression the parser was
    /// able to recover, if any.
    Error {
        category: ErrorCategory,
        child: Option<NodeId>,
    },

    Name {
        value: SmolStr,
    },
    Constant,
    Number,
    StringList,
    String,

    /// `left.member`
    MemberAccess {
        left: NodeId,
        member: NodeId,
    },
    Call,
    Argument,
    Index,
    BinaryOperation,
    UnaryOperation,
    Ternary,
    Lambda,
    ListComprehension,
    ComprehensionFor,
    ComprehensionIf,
    List,
    Tuple,
    Dictionary,
    Set,
}

impl NodeKind {
    /// Returns true if nodes of this kind are expressions.
    pub fn is_expression(&self) -> bool {
        match self {
            NodeKind::Error { .. }
            | NodeKind::Name { .. }
            | NodeKind::Constant
            | NodeKind::Number
            | NodeKind::StringList
            | NodeKind::String
            | NodeKind::MemberAccess { .. }
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
            | NodeKind::Set => true,
            NodeKind::Module
            | NodeKind::Suite
            | NodeKind::StatementList
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
            | NodeKind::ImportFrom { .. }
            | NodeKind::ImportFromAs { .. }
            | NodeKind::ModuleName { .. }
            | NodeKind::Argument
            | NodeKind::ComprehensionFor
            | NodeKind::ComprehensionIf => false,
        }
    }
}

/// Describes what the parser was expecting when it produced an
/// [`NodeKind::Error`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// `[x for x ]`
    MissingIn,

    /// `a if b `
    MissingElse,

    /// `x = `
    MissingExpression,

    /// `@`
    MissingDecoratorCallName,

    /// `foo.`
    MissingMemberAccessName,
    MissingIndexOrSlice,
    MissingCallCloseParen,
    MissingTupleCloseParen,
    MissingListCloseBracket,
    MissingFunctionParameterList,
}
