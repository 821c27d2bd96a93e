use hir::{class_members, Symbol, Type};
use quill_syntax::{NodeId, SmolStr};

use super::{CompletionContext, Completions};

/// Complete member accesses, i.e. `receiver.$0`. Adds `CompletionItems` to
/// `result`.
pub(super) fn complete_member_access(
    result: &mut Completions,
    ctx: &CompletionContext<'_>,
    receiver: NodeId,
) {
    // Figure out the type of the expression
    let receiver_ty = match ctx.file.info().type_of(receiver) {
        Some(ty) => ty,
        _ => {
            log::trace!("receiver of member access has no type");
            return;
        }
    };

    let mut members = Vec::new();
    collect_members(receiver_ty, &mut members);

    for (name, symbol) in members {
        if !symbol.is_externally_hidden() {
            result.add_symbol(ctx, &name, &symbol);
        }
    }
}

/// Collects the members of every type `ty` may be.
fn collect_members(ty: &Type, members: &mut Vec<(SmolStr, Symbol)>) {
    match ty {
        Type::Instance(class) => members.extend(class_members(class, true)),
        Type::Class(class) => members.extend(class_members(class, false)),
        Type::Module(module) => {
            let fields = module.fields.iter().chain(module.loader_fields.iter());
            members.extend(fields.map(|(name, symbol)| (name.clone(), symbol.clone())));
        }
        Type::Union(types) => {
            for ty in types {
                collect_members(ty, members);
            }
        }
        Type::Unknown
        | Type::Any
        | Type::None
        | Type::Function(_)
        | Type::Overloaded(_) => {}
    }
}
