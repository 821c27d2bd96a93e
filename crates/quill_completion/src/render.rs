mod function;

use function::FunctionRender;
use hir::{Declaration, DeclarationKind, Symbol, Type};
use quill_syntax::SmolStr;

use crate::{Builder, CompletionItem, CompletionItemKind};

/// Starts a `CompletionItem` for `symbol` under the name `name`. Returns
/// `None` if the symbol has no declarations.
pub(crate) fn render_symbol(name: &SmolStr, symbol: &Symbol) -> Option<Builder> {
    let declaration = symbol.primary_declaration()?;
    Some(Render::new(name, declaration).render())
}

/// Generic renderer for completion items.
struct Render<'a> {
    name: &'a SmolStr,
    declaration: &'a Declaration,
}

impl<'a> Render<'a> {
    fn new(name: &'a SmolStr, declaration: &'a Declaration) -> Render<'a> {
        Render { name, declaration }
    }

    fn render(self) -> Builder {
        let kind = match self.declaration.kind {
            DeclarationKind::Variable | DeclarationKind::Parameter => CompletionItemKind::Variable,
            DeclarationKind::Function => CompletionItemKind::Function,
            DeclarationKind::Method => CompletionItemKind::Method,
            DeclarationKind::Class => CompletionItemKind::Class,
            DeclarationKind::Module => CompletionItemKind::Module,
        };

        let detail = match self.declaration.kind {
            DeclarationKind::Variable | DeclarationKind::Parameter => self.typed_detail(),
            DeclarationKind::Function | DeclarationKind::Method => {
                FunctionRender::new(self.name, self.declaration.ty.as_ref()).detail()
            }
            DeclarationKind::Class => format!("class {}()", self.name),
            DeclarationKind::Module => self.name.to_string(),
        };

        CompletionItem::builder(kind, self.name.clone())
            .detail(detail)
            .documentation(self.declaration.ty.as_ref().and_then(Type::documentation))
    }

    /// Returns `name: type`
    fn typed_detail(&self) -> String {
        match &self.declaration.ty {
            Some(ty) => format!("{}: {ty}", self.name),
            None => format!("{}: {}", self.name, Type::Unknown),
        }
    }
}
