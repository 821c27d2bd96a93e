//! Syntax layer used throughout Quill.
//!
//! The parser that produces a [`ParseTree`] and its [`Tokens`] lives outside
//! of this workspace; this crate defines the shape it hands over and the
//! queries the analysis layers run against it:
//!     - an arena of nodes with non-owning parent links
//!     - offset based lookup of the most specific node
//!     - a token stream that can be searched by offset
//!     - a mapping from offsets to line/column positions

mod builder;
mod kind;
mod line_index;
mod token;
mod tree;

pub use smol_str::SmolStr;
pub use text_size::{TextRange, TextSize};

pub use crate::{
    builder::{TreeBuilder, TreeError},
    kind::{ErrorCategory, NodeKind},
    line_index::{LineCol, LineIndex},
    token::{Token, TokenKind, Tokens},
    tree::{NodeData, NodeId, ParseTree},
};
