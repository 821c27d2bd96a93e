use std::{fmt, sync::Arc};

use itertools::Itertools;
use quill_syntax::SmolStr;
use rustc_hash::FxHashSet;

use crate::{Symbol, SymbolTable};

/// A type as resolved by the semantic analyzer.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Unknown,
    Any,
    None,
    Module(Arc<ModuleType>),

    /// The class object itself, e.g. the type of `int` in `x = int`
    Class(Arc<ClassType>),

    /// An instance of a class, e.g. the type of `x` in `x = int()`
    Instance(Arc<ClassType>),
    Function(Arc<FunctionType>),
    Overloaded(Vec<Arc<FunctionType>>),
    Union(Vec<Type>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleType {
    pub name: SmolStr,
    pub doc: Option<String>,

    /// The top-level symbols of the module
    pub fields: Arc<SymbolTable>,

    /// Submodules that become attributes of the module when it is imported
    pub loader_fields: Arc<SymbolTable>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassType {
    pub name: SmolStr,
    pub doc: Option<String>,
    pub fields: SymbolTable,
    pub bases: Vec<Arc<ClassType>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParam {
    pub name: SmolStr,
    pub ty: Option<Type>,
    pub has_default: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub params: Vec<FunctionParam>,
    pub return_type: Type,
    pub doc: Option<String>,
}

impl Type {
    /// Returns the docstring of the module, class or function this type
    /// refers to. For overloads the first documented signature is used.
    pub fn documentation(&self) -> Option<&str> {
        match self {
            Type::Module(module) => module.doc.as_deref(),
            Type::Class(class) | Type::Instance(class) => class.doc.as_deref(),
            Type::Function(function) => function.doc.as_deref(),
            Type::Overloaded(overloads) => overloads.iter().find_map(|f| f.doc.as_deref()),
            Type::Unknown | Type::Any | Type::None | Type::Union(_) => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unknown => f.write_str("Unknown"),
            Type::Any => f.write_str("Any"),
            Type::None => f.write_str("None"),
            Type::Module(module) => write!(f, "Module(\"{}\")", module.name),
            Type::Class(class) => write!(f, "Type[{}]", class.name),
            Type::Instance(class) => f.write_str(&class.name),
            Type::Function(function) => fmt::Display::fmt(function.as_ref(), f),
            Type::Overloaded(overloads) => {
                write!(f, "Overload[{}]", overloads.iter().format(", "))
            }
            Type::Union(types) => write!(f, "Union[{}]", types.iter().format(", ")),
        }
    }
}

impl fmt::Display for FunctionParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(ty) = &self.ty {
            write!(f, ": {ty}")?;
        }
        if self.has_default {
            f.write_str(if self.ty.is_some() { " = ..." } else { "=..." })?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) -> {}",
            self.params.iter().format(", "),
            self.return_type
        )
    }
}

/// Collects the members of `class` and of all of its base classes. Members of
/// a derived class hide members with the same name in its bases. Members that
/// only exist on instances are skipped unless `include_instance_vars` is set.
pub fn class_members(class: &ClassType, include_instance_vars: bool) -> Vec<(SmolStr, Symbol)> {
    let mut seen = FxHashSet::default();
    let mut members = Vec::new();
    let mut stack = vec![class];
    while let Some(class) = stack.pop() {
        for (name, symbol) in class.fields.iter() {
            if !include_instance_vars && symbol.is_instance_member() {
                continue;
            }
            if seen.insert(name.clone()) {
                members.push((name.clone(), symbol.clone()));
            }
        }
        stack.extend(class.bases.iter().rev().map(Arc::as_ref));
    }
    members
}
