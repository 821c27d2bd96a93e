use std::path::{Path, PathBuf};

use quill_syntax::{LineIndex, ParseTree, Tokens};

use crate::{NodeInfo, Scopes};

/// A single file after parsing and semantic analysis. This is the input of
/// every IDE request on that file.
#[derive(Debug)]
pub struct AnalyzedFile {
    path: PathBuf,
    text: String,
    tree: ParseTree,
    tokens: Tokens,
    line_index: LineIndex,
    scopes: Scopes,
    info: NodeInfo,
}

impl AnalyzedFile {
    pub fn new(
        path: impl Into<PathBuf>,
        text: impl Into<String>,
        tree: ParseTree,
        tokens: Tokens,
        scopes: Scopes,
        info: NodeInfo,
    ) -> Self {
        let text = text.into();
        let line_index = LineIndex::new(&text);
        AnalyzedFile {
            path: path.into(),
            text,
            tree,
            tokens,
            line_index,
            scopes,
            info,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tree(&self) -> &ParseTree {
        &self.tree
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    pub fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    pub fn info(&self) -> &NodeInfo {
        &self.info
    }
}
