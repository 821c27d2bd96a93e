use std::path::PathBuf;

use la_arena::ArenaMap;
use quill_syntax::{NodeId, SmolStr};

use crate::{ScopeId, Type};

/// A submodule that is made available by importing its parent package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplicitImport {
    pub name: SmolStr,
    pub path: PathBuf,
}

/// How the module of an import statement was resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub is_import_found: bool,

    /// The files of every package along the dotted path, outermost first.
    pub resolved_paths: Vec<PathBuf>,
    pub implicit_imports: Vec<ImplicitImport>,
}

impl ImportResult {
    /// The file the import ultimately refers to.
    pub fn resolved_path(&self) -> Option<&PathBuf> {
        if self.is_import_found {
            self.resolved_paths.last()
        } else {
            None
        }
    }
}

/// Information the semantic analyzer attached to individual syntax nodes.
#[derive(Debug, Default)]
pub struct NodeInfo {
    scopes: ArenaMap<NodeId, ScopeId>,
    types: ArenaMap<NodeId, Type>,
    imports: ArenaMap<NodeId, ImportResult>,
}

impl NodeInfo {
    /// Records the scope that is introduced by `node`.
    pub fn set_scope(&mut self, node: NodeId, scope: ScopeId) {
        self.scopes.insert(node, scope);
    }

    pub fn scope(&self, node: NodeId) -> Option<ScopeId> {
        self.scopes.get(node).copied()
    }

    /// Records the type of the expression `node`.
    pub fn set_type(&mut self, node: NodeId, ty: Type) {
        self.types.insert(node, ty);
    }

    pub fn type_of(&self, node: NodeId) -> Option<&Type> {
        self.types.get(node)
    }

    /// Records the resolution of the module name `node`.
    pub fn set_import(&mut self, node: NodeId, import: ImportResult) {
        self.imports.insert(node, import);
    }

    pub fn import(&self, node: NodeId) -> Option<&ImportResult> {
        self.imports.get(node)
    }
}
