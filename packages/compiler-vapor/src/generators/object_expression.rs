//! Object Literals

use crate::generators::expression::{gen_expression, to_string_literal};
use crate::generators::CodegenContext;
use crate::ir::IRExpression;
use crate::shared::is_simple_identifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    /// Known name, printed bare when it is an identifier and quoted otherwise.
    Static(String),
    /// Code evaluated at runtime, printed as `[code]`.
    Computed(String),
}

#[derive(Debug, Clone)]
pub struct ObjectProperty<'a> {
    pub key: PropertyKey,
    pub value: &'a IRExpression,
}

pub fn gen_property_key(key: &PropertyKey, ctx: &mut CodegenContext) {
    match key {
        PropertyKey::Static(name) if is_simple_identifier(name) => ctx.push(name),
        PropertyKey::Static(name) => ctx.push(&to_string_literal(name)),
        PropertyKey::Computed(code) => {
            ctx.push("[");
            ctx.push(code);
            ctx.push("]");
        }
    }
}

/// `{}`, `{ a: 1 }`, or one property per line once there are two or more.
pub fn gen_object_expression(properties: &[ObjectProperty<'_>], ctx: &mut CodegenContext) {
    if properties.is_empty() {
        ctx.push("{}");
        return;
    }

    let gen_properties = |ctx: &mut CodegenContext| {
        for (i, property) in properties.iter().enumerate() {
            gen_property_key(&property.key, ctx);
            ctx.push(": ");
            gen_expression(property.value, ctx);
            if i + 1 < properties.len() {
                ctx.push(",");
                ctx.newline();
            }
        }
    };

    if properties.len() == 1 {
        ctx.push("{ ");
        gen_properties(ctx);
        ctx.push(" }");
        return;
    }

    ctx.push("{");
    ctx.with_indent(|ctx| {
        ctx.newline();
        gen_properties(ctx);
        ctx.newline();
    });
    ctx.push("}");
}
