use hir::Type;
use itertools::Itertools;
use quill_syntax::SmolStr;

/// Similar to `Render` but used to render the detail of a function or method
pub(super) struct FunctionRender<'a> {
    name: &'a SmolStr,
    ty: Option<&'a Type>,
}

impl<'a> FunctionRender<'a> {
    pub(super) fn new(name: &'a SmolStr, ty: Option<&'a Type>) -> FunctionRender<'a> {
        FunctionRender { name, ty }
    }

    /// Returns the signature of the function, e.g. `name(a, b) -> int`. Each
    /// overload gets a line of its own. If the type is not callable at all
    /// this falls back to `name: type`.
    pub(super) fn detail(&self) -> String {
        match self.ty {
            Some(Type::Function(function)) => format!("{}{function}", self.name),
            Some(Type::Overloaded(overloads)) => overloads
                .iter()
                .map(|function| format!("{}{function}", self.name))
                .join("\n"),
            Some(ty) => format!("{}: {ty}", self.name),
            None => format!("{}: {}", self.name, Type::Unknown),
        }
    }
}
