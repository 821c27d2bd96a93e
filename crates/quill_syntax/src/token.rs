use text_size::{TextRange, TextSize};

/// The kind of a [`Token`]. Comments are not part of the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Name,
    Keyword,
    Number,
    Operator,
    NewLine,
    String { terminated: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Token { kind, range }
    }

    /// Returns true if the offset lies between the first and the last
    /// character of this token (exclusive on both ends).
    pub fn strictly_contains(&self, offset: TextSize) -> bool {
        self.range.start() < offset && offset < self.range.end()
    }

    /// Returns true if text typed at `offset` becomes part of the string
    /// literal. An unterminated string swallows everything up to its end.
    pub fn is_string_at(&self, offset: TextSize) -> bool {
        match self.kind {
            TokenKind::String { terminated: true } => self.strictly_contains(offset),
            TokenKind::String { terminated: false } => {
                self.range.start() < offset && offset <= self.range.end()
            }
            _ => false,
        }
    }
}

/// The tokens of a file, ordered by their start offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
}

impl From<Vec<Token>> for Tokens {
    fn from(mut tokens: Vec<Token>) -> Self {
        tokens.sort_by_key(|token| token.range.start());
        Tokens { tokens }
    }
}

impl Tokens {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Returns the index of the last token that starts at or before
    /// `offset`, or `None` if the offset precedes the first token.
    pub fn token_index_at(&self, offset: TextSize) -> Option<usize> {
        self.tokens
            .partition_point(|token| token.range.start() <= offset)
            .checked_sub(1)
    }

    /// Returns the token returned by [`Tokens::token_index_at`].
    pub fn token_at(&self, offset: TextSize) -> Option<&Token> {
        self.token_index_at(offset).and_then(|index| self.get(index))
    }
}
