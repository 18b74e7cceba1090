//! Custom Directives

use crate::generators::context::{gen, CodeFragment};
use crate::generators::expression::to_string_literal;
use crate::generators::CodegenContext;
use crate::ir::WithDirectiveIRNode;
use crate::shared::is_simple_identifier;

/// `_withDirectives(nX, [[dir, () => value, arg, { mod: true }]])`
///
/// Trailing slots the directive does not use are left off; a missing slot
/// followed by a present one is written as `void 0`.
pub fn gen_with_directive(oper: &WithDirectiveIRNode, ctx: &mut CodegenContext) {
    let dir = &oper.dir;
    let with_directives = ctx.vapor_helper("withDirectives");
    let resolve_directive = ctx.helper("resolveDirective");

    let value = dir.exp.as_ref().map(|exp| format!("() => {}", exp.content));
    let arg = dir.arg.as_ref().map(|arg| {
        if arg.is_static {
            to_string_literal(&arg.content)
        } else {
            arg.content.clone()
        }
    });
    let modifiers = (!dir.modifiers.is_empty()).then(|| {
        let entries: Vec<String> = dir
            .modifiers
            .iter()
            .map(|modifier| {
                let key = if is_simple_identifier(modifier) {
                    modifier.clone()
                } else {
                    to_string_literal(modifier)
                };
                format!("{}: true", key)
            })
            .collect();
        format!("{{ {} }}", entries.join(", "))
    });

    let mut entry: Vec<CodeFragment<'_>> = vec![format!(
        "{}({})",
        resolve_directive,
        to_string_literal(&dir.name)
    )
    .into()];
    let slots = [value, arg, modifiers];
    if let Some(last) = slots.iter().rposition(Option::is_some) {
        for slot in slots.into_iter().take(last + 1) {
            entry.push(slot.unwrap_or_else(|| "void 0".to_string()).into());
        }
    }

    ctx.newline();
    ctx.push_fn_call(
        &with_directives,
        vec![
            oper.element.to_string().into(),
            gen(move |ctx| {
                ctx.push("[");
                ctx.push_multi(("[", "]", ", "), entry);
                ctx.push("]");
            }),
        ],
    );
}
