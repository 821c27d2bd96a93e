use std::path::PathBuf;

use quill_syntax::{SmolStr, TextRange};
use rustc_hash::FxHashMap;

use crate::Type;

/// The category of a [`Declaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Variable,
    Parameter,
    Function,
    Method,
    Class,
    Module,
}

/// A single place where a symbol is bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub kind: DeclarationKind,

    /// The type the analyzer inferred for this binding, if any
    pub ty: Option<Type>,

    /// The file in which the binding occurs
    pub path: PathBuf,
    pub range: TextRange,
}

impl Declaration {
    pub fn new(kind: DeclarationKind, path: impl Into<PathBuf>) -> Self {
        Declaration {
            kind,
            ty: None,
            path: path.into(),
            range: TextRange::default(),
        }
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = range;
        self
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SymbolFlags: u8 {
        /// The symbol is not visible from outside of its scope, for instance
        /// a private name in a library stub.
        const EXTERNALLY_HIDDEN = 0b0001;

        /// The symbol is bound in a class body.
        const CLASS_MEMBER = 0b0010;

        /// The symbol is only bound on instances (`self.x = ...`).
        const INSTANCE_MEMBER = 0b0100;
    }
}

/// A named entity together with all of its declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Symbol {
    declarations: Vec<Declaration>,
    flags: SymbolFlags,
}

impl Symbol {
    pub fn new(flags: SymbolFlags) -> Self {
        Symbol {
            declarations: Vec::new(),
            flags,
        }
    }

    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn add_declaration(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// The declaration that determines how the symbol is presented.
    pub fn primary_declaration(&self) -> Option<&Declaration> {
        self.declarations.first()
    }

    pub fn flags(&self) -> SymbolFlags {
        self.flags
    }

    pub fn is_externally_hidden(&self) -> bool {
        self.flags.contains(SymbolFlags::EXTERNALLY_HIDDEN)
    }

    pub fn is_instance_member(&self) -> bool {
        self.flags.contains(SymbolFlags::INSTANCE_MEMBER)
    }
}

/// The bindings of a single namespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: FxHashMap<SmolStr, Symbol>,
}

impl FromIterator<(SmolStr, Symbol)> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = (SmolStr, Symbol)>>(iter: T) -> Self {
        SymbolTable {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl SymbolTable {
    /// Adds a symbol, replacing any previous symbol with the same name.
    pub fn insert(&mut self, name: impl Into<SmolStr>, symbol: Symbol) {
        self.symbols.insert(name.into(), symbol);
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over all symbols in an unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &Symbol)> {
        self.symbols.iter()
    }

    /// Returns true if `name` is bound in this table and may be referenced
    /// from outside of it.
    pub fn is_exported(&self, name: &str) -> bool {
        self.get(name)
            .is_some_and(|symbol| !symbol.is_externally_hidden())
    }
}
