use std::path::Path;

use hir::{ImportMap, ModuleSymbolMap};
use once_cell::unsync::OnceCell;
use quill_syntax::SmolStr;

/// Access to the analysis results of the whole project. Both methods may be
/// expensive; they are called at most once per completion request and only
/// when the request actually needs the information.
pub trait ProjectSnapshot {
    /// Returns the symbol tables of the files imported by the current file.
    fn import_map(&self) -> ImportMap;

    /// Returns the top-level symbols of every module in the project.
    fn module_symbols(&self) -> ModuleSymbolMap;
}

/// A dotted module path as it was typed in an import statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub leading_dots: u32,
    pub name_parts: Vec<SmolStr>,
    pub has_trailing_dot: bool,
}

/// Translates between file paths and module names.
pub trait ImportResolver {
    /// Returns the dotted module name under which `path` can be imported.
    fn module_name(&self, path: &Path) -> SmolStr;

    /// Returns the names that can follow the partially typed module path.
    fn module_name_completions(&self, descriptor: &ModuleDescriptor) -> Vec<SmolStr>;
}

/// Everything a completion request needs to know about the rest of the
/// project.
pub trait Project: ProjectSnapshot + ImportResolver {}

impl<T: ProjectSnapshot + ImportResolver + ?Sized> Project for T {}

/// Wraps a [`Project`] for the duration of a single request and memoizes the
/// expensive [`ProjectSnapshot`] calls.
pub(crate) struct LazyProject<'a> {
    project: &'a dyn Project,
    import_map: OnceCell<ImportMap>,
    module_symbols: OnceCell<ModuleSymbolMap>,
}

impl<'a> LazyProject<'a> {
    pub(crate) fn new(project: &'a dyn Project) -> Self {
        LazyProject {
            project,
            import_map: OnceCell::new(),
            module_symbols: OnceCell::new(),
        }
    }

    pub(crate) fn import_map(&self) -> &ImportMap {
        self.import_map.get_or_init(|| {
            log::trace!("retrieving import map");
            self.project.import_map()
        })
    }

    pub(crate) fn module_symbols(&self) -> &ModuleSymbolMap {
        self.module_symbols.get_or_init(|| {
            log::trace!("retrieving module symbols");
            self.project.module_symbols()
        })
    }

    pub(crate) fn module_name(&self, path: &Path) -> SmolStr {
        self.project.module_name(path)
    }

    pub(crate) fn module_name_completions(&self, descriptor: &ModuleDescriptor) -> Vec<SmolStr> {
        self.project.module_name_completions(descriptor)
    }
}
