//! The semantic model of an analyzed Quill program.
//!
//! Everything in here is produced by the semantic analyzer and handed to the
//! IDE layers as a read-only snapshot: the symbol tables and scope chains of
//! a file, the resolved types of its expressions, and how its imports were
//! resolved. The top-level symbol tables of all other modules in the project
//! are exposed through [`ModuleSymbolMap`] and [`ImportMap`].

mod file;
mod node_info;
mod project;
mod scope;
mod symbol;
mod ty;

pub use crate::{
    file::AnalyzedFile,
    node_info::{ImplicitImport, ImportResult, NodeInfo},
    project::{ImportMap, ModuleSymbolMap},
    scope::{Scope, ScopeId, ScopeKind, Scopes},
    symbol::{Declaration, DeclarationKind, Symbol, SymbolFlags, SymbolTable},
    ty::{class_members, ClassType, FunctionParam, FunctionType, ModuleType, Type},
};
