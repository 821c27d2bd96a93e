use quill_syntax::{LineCol, SmolStr, TextSize};

/// A `CompletionItem` describes a single completion variant in an editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// Label in the completion pop up which identifies completion.
    pub label: SmolStr,

    /// The type of completion
    pub kind: CompletionItemKind,

    /// Additional info to show in the UI pop up, e.g. the signature.
    pub detail: Option<String>,

    /// The docstring of the completed entity.
    pub documentation: Option<String>,

    /// The module this item will be imported from when it is accepted.
    pub source_module: Option<SmolStr>,

    /// Editors order items by this text.
    pub sort_text: String,

    /// Edits elsewhere in the file that are required for the completion to
    /// be valid, e.g. extending an import statement.
    pub additional_edits: Vec<AdditionalEdit>,
}

/// Inserts `new_text` at a position in the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdditionalEdit {
    pub offset: TextSize,
    pub position: LineCol,
    pub new_text: String,
}

/// Type of completion used to provide hints to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionItemKind {
    Keyword,
    Variable,
    Function,
    Method,
    Class,
    Module,
}

impl CompletionItemKind {
    /// Returns a tag that describes the type of item that was completed. This
    /// is only used in tests, to be able to distinguish between items with
    /// the same name.
    #[cfg(test)]
    pub(crate) fn tag(self) -> &'static str {
        match self {
            CompletionItemKind::Keyword => "kw",
            CompletionItemKind::Variable => "va",
            CompletionItemKind::Function => "fn",
            CompletionItemKind::Method => "me",
            CompletionItemKind::Class => "cl",
            CompletionItemKind::Module => "md",
        }
    }
}

/// Sort text prefixes of the three buckets. They sort below every identifier
/// character, so a bucket never depends on the first letter of a name.
const ORDINARY_SORT_PREFIX: char = '0';

/// Moves dunder names (`__init__`) behind ordinary names.
const DUNDER_SORT_PREFIX: char = '1';

/// Moves auto-import suggestions behind everything else.
const AUTO_IMPORT_SORT_PREFIX: char = '2';

/// Returns true for names like `__init__`.
pub(crate) fn is_dunder_name(name: &str) -> bool {
    name.len() > 4 && name.starts_with("__") && name.ends_with("__")
}

impl CompletionItem {
    /// Constructs a [`Builder`] to build a `CompletionItem` with
    pub fn builder(kind: CompletionItemKind, label: impl Into<SmolStr>) -> Builder {
        Builder {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            source_module: None,
            additional_edits: Vec::new(),
        }
    }
}

/// A builder for a `CompletionItem`. Constructed by calling
/// [`CompletionItem::builder`].
#[derive(Debug)]
pub struct Builder {
    label: SmolStr,
    kind: CompletionItemKind,
    detail: Option<String>,
    documentation: Option<String>,
    source_module: Option<SmolStr>,
    additional_edits: Vec<AdditionalEdit>,
}

impl Builder {
    /// Completes building the `CompletionItem` and returns it
    pub fn finish(self) -> CompletionItem {
        let sort_text = if self.source_module.is_some() {
            format!("{AUTO_IMPORT_SORT_PREFIX}{}", self.label)
        } else if is_dunder_name(&self.label) {
            format!("{DUNDER_SORT_PREFIX}{}", self.label)
        } else {
            format!("{ORDINARY_SORT_PREFIX}{}", self.label)
        };

        CompletionItem {
            label: self.label,
            kind: self.kind,
            detail: self.detail,
            documentation: self.documentation,
            source_module: self.source_module,
            sort_text,
            additional_edits: self.additional_edits,
        }
    }

    /// Set the details of the completion item
    pub fn detail(mut self, detail: impl Into<String>) -> Builder {
        self.detail = Some(detail.into());
        self
    }

    pub fn documentation(mut self, documentation: Option<impl Into<String>>) -> Builder {
        self.documentation = documentation.map(Into::into);
        self
    }

    /// Marks the item as an auto-import from `module`
    pub fn source_module(mut self, module: impl Into<SmolStr>) -> Builder {
        self.source_module = Some(module.into());
        self
    }

    pub fn additional_edits(mut self, edits: Vec<AdditionalEdit>) -> Builder {
        self.additional_edits = edits;
        self
    }
}
