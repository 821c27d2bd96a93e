use std::ops::Index;

use la_arena::{Arena, Idx};

use crate::SymbolTable;

pub type ScopeId = Idx<Scope>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Module,
    Class,
    Function,

    /// A short-lived namespace, like the one of a comprehension. Its bindings
    /// are not offered as completions.
    Transient,
}

/// A lexical namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    pub kind: ScopeKind,
    pub symbols: SymbolTable,
    pub parent: Option<ScopeId>,
}

impl Scope {
    pub fn new(kind: ScopeKind, parent: Option<ScopeId>) -> Self {
        Scope {
            kind,
            symbols: SymbolTable::default(),
            parent,
        }
    }

    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn is_transient(&self) -> bool {
        self.kind == ScopeKind::Transient
    }
}

/// All scopes of a single file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scopes {
    scopes: Arena<Scope>,
}

impl Index<ScopeId> for Scopes {
    type Output = Scope;

    fn index(&self, index: ScopeId) -> &Self::Output {
        &self.scopes[index]
    }
}

impl Scopes {
    pub fn alloc(&mut self, scope: Scope) -> ScopeId {
        self.scopes.alloc(scope)
    }

    /// Returns `scope` followed by all of its parents, ending at the module
    /// scope.
    pub fn scope_chain(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), move |&scope| self.scopes[scope].parent)
    }
}
