use std::{
    cell::{Cell, RefCell},
    path::{Path, PathBuf},
    sync::Arc,
};

use hir::{
    AnalyzedFile, ClassType, Declaration, DeclarationKind, ImportMap, ImportResult, ModuleSymbolMap,
    NodeInfo, Scope, ScopeId, ScopeKind, Scopes, Symbol, SymbolFlags, SymbolTable, Type,
};
use itertools::Itertools;
use quill_syntax::{
    NodeId, NodeKind, SmolStr, TextRange, TextSize, Token, TokenKind, TreeBuilder,
};
use rustc_hash::FxHashMap;

use crate::{
    CompletionConfig, CompletionItem, ImportResolver, ModuleDescriptor, ProjectSnapshot,
};

/// Builds an [`AnalyzedFile`] piece by piece, the way a parser and an
/// analyzer would. Text is appended from left to right; nodes are allocated
/// bottom-up and get the range of the text they cover.
pub(crate) struct FileFixture {
    path: PathBuf,
    text: String,
    builder: TreeBuilder,
    tokens: Vec<Token>,
    root: Option<NodeId>,
    scopes: Scopes,
    info: NodeInfo,
}

impl FileFixture {
    pub(crate) fn new() -> Self {
        Self::with_path("main.py")
    }

    pub(crate) fn with_path(path: impl Into<PathBuf>) -> Self {
        FileFixture {
            path: path.into(),
            text: String::new(),
            builder: TreeBuilder::default(),
            tokens: Vec::new(),
            root: None,
            scopes: Scopes::default(),
            info: NodeInfo::default(),
        }
    }

    /// Returns the end of the text written so far. This is where the cursor
    /// (`$0`) of a test goes.
    pub(crate) fn cursor(&self) -> TextSize {
        TextSize::of(self.text.as_str())
    }

    pub(crate) fn range(&self, node: NodeId) -> TextRange {
        self.builder.range(node)
    }

    fn push(&mut self, text: &str) -> TextRange {
        let start = self.cursor();
        self.text.push_str(text);
        TextRange::new(start, self.cursor())
    }

    fn push_token(&mut self, kind: TokenKind, text: &str) -> TextRange {
        let range = self.push(text);
        self.tokens.push(Token::new(kind, range));
        range
    }

    /// Appends text that produces no tokens, like whitespace and comments.
    pub(crate) fn text(&mut self, text: &str) {
        self.push(text);
    }

    pub(crate) fn newline(&mut self) {
        self.push_token(TokenKind::NewLine, "\n");
    }

    pub(crate) fn keyword(&mut self, keyword: &str) {
        self.push_token(TokenKind::Keyword, keyword);
    }

    pub(crate) fn punct(&mut self, punct: &str) {
        self.push_token(TokenKind::Operator, punct);
    }

    pub(crate) fn name(&mut self, value: &str) -> NodeId {
        let range = self.push_token(TokenKind::Name, value);
        self.builder
            .alloc(NodeKind::Name { value: value.into() }, range, vec![])
    }

    pub(crate) fn number(&mut self, value: &str) -> NodeId {
        let range = self.push_token(TokenKind::Number, value);
        self.builder.alloc(NodeKind::Number, range, vec![])
    }

    /// Appends a string literal including its quotes and returns the
    /// `StringList` that wraps it. A literal without a closing quote is
    /// unterminated.
    pub(crate) fn string(&mut self, literal: &str) -> NodeId {
        let terminated = literal.len() >= 2 && literal.chars().next() == literal.chars().last();
        let range = self.push_token(TokenKind::String { terminated }, literal);
        let string = self.builder.alloc(NodeKind::String, range, vec![]);
        self.builder.alloc(NodeKind::StringList, range, vec![string])
    }

    /// Allocates a node that spans its children.
    pub(crate) fn node(&mut self, kind: NodeKind, children: Vec<NodeId>) -> NodeId {
        let range = match (children.first(), children.last()) {
            (Some(&first), Some(&last)) => {
                self.builder.range(first).cover(self.builder.range(last))
            }
            _ => TextRange::empty(self.cursor()),
        };
        self.builder.alloc(kind, range, children)
    }

    /// Allocates a node that spans from `start` to the end of the text
    /// written so far.
    pub(crate) fn node_from(
        &mut self,
        start: TextSize,
        kind: NodeKind,
        children: Vec<NodeId>,
    ) -> NodeId {
        let range = TextRange::new(start, self.cursor());
        self.builder.alloc(kind, range, children)
    }

    /// Allocates a dotted module path that ends at the text written so far.
    pub(crate) fn module_name(
        &mut self,
        start: TextSize,
        leading_dots: u32,
        name_parts: Vec<NodeId>,
        has_trailing_dot: bool,
    ) -> NodeId {
        let kind = NodeKind::ModuleName {
            leading_dots,
            name_parts: name_parts.clone(),
            has_trailing_dot,
        };
        self.node_from(start, kind, name_parts)
    }

    /// Writes `from <module> import <names>` and returns the statement and
    /// its module path.
    pub(crate) fn import_from(&mut self, module: &str, names: &[&str]) -> (NodeId, NodeId) {
        let start = self.cursor();
        self.keyword("from");
        self.text(" ");

        let module_start = self.cursor();
        let leading_dots = module.chars().take_while(|&c| c == '.').count();
        if leading_dots > 0 {
            self.punct(&module[..leading_dots]);
        }
        let mut parts = Vec::new();
        for (index, part) in module[leading_dots..].split('.').enumerate() {
            if index > 0 {
                self.punct(".");
            }
            parts.push(self.name(part));
        }
        let module = self.module_name(module_start, leading_dots as u32, parts, false);

        self.text(" ");
        self.keyword("import");
        self.text(" ");
        let mut imports = Vec::new();
        for (index, name) in names.iter().enumerate() {
            if index > 0 {
                self.punct(",");
                self.text(" ");
            }
            let name = self.name(name);
            imports.push(self.node(NodeKind::ImportFromAs { name, alias: None }, vec![name]));
        }

        let mut children = vec![module];
        children.extend(imports.iter().copied());
        let kind = NodeKind::ImportFrom {
            module,
            imports,
            is_wildcard: false,
        };
        (self.node_from(start, kind, children), module)
    }

    /// Allocates the root of the tree. It spans the whole text written so
    /// far.
    pub(crate) fn module(&mut self, statements: Vec<NodeId>) -> NodeId {
        let root = self.node_from(0.into(), NodeKind::Module, statements);
        self.root = Some(root);
        root
    }

    /// Attaches a new scope to `node`.
    pub(crate) fn scope(
        &mut self,
        node: NodeId,
        kind: ScopeKind,
        parent: Option<ScopeId>,
        symbols: SymbolTable,
    ) -> ScopeId {
        let scope = self
            .scopes
            .alloc(Scope::new(kind, parent).with_symbols(symbols));
        self.info.set_scope(node, scope);
        scope
    }

    pub(crate) fn set_type(&mut self, node: NodeId, ty: Type) {
        self.info.set_type(node, ty);
    }

    /// Records that the module path `module_name` resolved to `path`.
    pub(crate) fn resolve_import(&mut self, module_name: NodeId, path: impl Into<PathBuf>) {
        self.set_import(
            module_name,
            ImportResult {
                is_import_found: true,
                resolved_paths: vec![path.into()],
                implicit_imports: vec![],
            },
        );
    }

    pub(crate) fn set_import(&mut self, module_name: NodeId, import: ImportResult) {
        self.info.set_import(module_name, import);
    }

    pub(crate) fn finish(self) -> AnalyzedFile {
        let root = self.root.expect("the fixture has no module");
        let tree = self.builder.finish(root).expect("invalid fixture tree");
        AnalyzedFile::new(
            self.path,
            self.text,
            tree,
            self.tokens.into(),
            self.scopes,
            self.info,
        )
    }
}

/// Returns a symbol with a single declaration in `path`.
pub(crate) fn symbol(kind: DeclarationKind, path: &str, ty: Option<Type>) -> Symbol {
    let mut declaration = Declaration::new(kind, path);
    if let Some(ty) = ty {
        declaration = declaration.with_type(ty);
    }
    Symbol::new(SymbolFlags::empty()).with_declaration(declaration)
}

/// Builds a symbol table from name and symbol pairs.
pub(crate) fn table(entries: Vec<(&str, Symbol)>) -> SymbolTable {
    entries
        .into_iter()
        .map(|(name, symbol)| (SmolStr::from(name), symbol))
        .collect()
}

/// Returns the type of an instance of a class without members.
pub(crate) fn instance(name: &str) -> Type {
    Type::Instance(Arc::new(ClassType {
        name: name.into(),
        doc: None,
        fields: SymbolTable::default(),
        bases: vec![],
    }))
}

/// A project that hands out fixed data and counts how often it was asked
/// for it.
#[derive(Default)]
pub(crate) struct TestProject {
    pub import_map: ImportMap,
    pub module_symbols: ModuleSymbolMap,
    pub module_names: FxHashMap<PathBuf, SmolStr>,
    pub module_completions: Vec<SmolStr>,
    pub import_map_calls: Cell<usize>,
    pub module_symbols_calls: Cell<usize>,
    pub descriptors: RefCell<Vec<ModuleDescriptor>>,
}

impl ProjectSnapshot for TestProject {
    fn import_map(&self) -> ImportMap {
        self.import_map_calls.set(self.import_map_calls.get() + 1);
        self.import_map.clone()
    }

    fn module_symbols(&self) -> ModuleSymbolMap {
        self.module_symbols_calls
            .set(self.module_symbols_calls.get() + 1);
        self.module_symbols.clone()
    }
}

impl ImportResolver for TestProject {
    fn module_name(&self, path: &Path) -> SmolStr {
        self.module_names.get(path).cloned().unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| SmolStr::from(stem.to_string_lossy()))
                .unwrap_or_default()
        })
    }

    fn module_name_completions(&self, descriptor: &ModuleDescriptor) -> Vec<SmolStr> {
        self.descriptors.borrow_mut().push(descriptor.clone());
        self.module_completions.clone()
    }
}

/// Computes the completions at `cursor`, ordered the way an editor presents
/// them.
pub(crate) fn completion_list(
    file: &AnalyzedFile,
    cursor: TextSize,
    project: &TestProject,
) -> Option<Vec<CompletionItem>> {
    completion_list_with_config(file, cursor, project, &CompletionConfig::default())
}

pub(crate) fn completion_list_with_config(
    file: &AnalyzedFile,
    cursor: TextSize,
    project: &TestProject,
    config: &CompletionConfig,
) -> Option<Vec<CompletionItem>> {
    let completions = super::completions(file, cursor, project, config)?;
    let mut items: Vec<CompletionItem> = completions.into();
    items.sort_by(|a, b| a.sort_text.cmp(&b.sort_text));
    Some(items)
}

/// Constructs a string representation of all the completions at `cursor`.
/// Every line holds the kind, the label, and the detail of an item.
pub(crate) fn completion_string(
    file: &AnalyzedFile,
    cursor: TextSize,
    project: &TestProject,
) -> String {
    let completions = completion_list(file, cursor, project).expect("no completions");
    let label_width = completions
        .iter()
        .map(|it| it.label.chars().count())
        .max()
        .unwrap_or_default()
        .min(16);
    completions
        .into_iter()
        .map(|item| {
            let mut result = format!("{} {}", item.kind.tag(), &item.label);
            if let Some(detail) = item.detail {
                result = format!("{:width$} {}", result, detail, width = label_width + 3);
            }
            result
        })
        .join("\n")
}
