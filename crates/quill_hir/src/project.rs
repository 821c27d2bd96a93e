use std::{collections::BTreeMap, path::{Path, PathBuf}, sync::Arc};

use rustc_hash::FxHashMap;

use crate::SymbolTable;

/// The symbol tables of all files that are imported, directly or
/// transitively, by a file. Keyed by the path of the imported file.
pub type ImportMap = FxHashMap<PathBuf, Arc<SymbolTable>>;

/// The top-level symbol table of every module in the project, keyed by the
/// file path of the module. Iteration follows path order so results are
/// stable from one request to the next.
#[derive(Debug, Clone, Default)]
pub struct ModuleSymbolMap {
    modules: BTreeMap<PathBuf, Arc<SymbolTable>>,
}

impl FromIterator<(PathBuf, Arc<SymbolTable>)> for ModuleSymbolMap {
    fn from_iter<T: IntoIterator<Item = (PathBuf, Arc<SymbolTable>)>>(iter: T) -> Self {
        ModuleSymbolMap {
            modules: iter.into_iter().collect(),
        }
    }
}

impl ModuleSymbolMap {
    pub fn insert(&mut self, path: impl Into<PathBuf>, symbols: Arc<SymbolTable>) {
        self.modules.insert(path.into(), symbols);
    }

    pub fn get(&self, path: &Path) -> Option<&Arc<SymbolTable>> {
        self.modules.get(path)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &SymbolTable)> {
        self.modules
            .iter()
            .map(|(path, symbols)| (path.as_path(), symbols.as_ref()))
    }
}
