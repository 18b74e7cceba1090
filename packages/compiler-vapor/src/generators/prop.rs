//! Prop Operations
//!
//! Renders `SetProp`, `SetBatchProps` and `SetMergeBatchProps`. Keys carrying a
//! `.prop` / `.attr` modifier are prefixed with `.` / `^` inside objects so the
//! runtime's batch helpers know how to apply them.

use crate::config::CompilerOptions;
use crate::generators::context::{gen, CodeFragment};
use crate::generators::expression::{gen_expression, to_string_literal};
use crate::generators::object_expression::{gen_object_expression, ObjectProperty, PropertyKey};
use crate::generators::CodegenContext;
use crate::ir::{
    DirectiveTransformResult, MergeItem, PropModifier, SetBatchPropsIRNode,
    SetMergeBatchPropsIRNode, SetPropIRNode,
};

/// Runtime helper for a single prop, and whether it takes the key argument.
fn prop_setter(prop: &DirectiveTransformResult) -> (&'static str, bool) {
    match (prop.static_key(), prop.modifier) {
        (Some("class"), _) => ("setClass", false),
        (Some("style"), _) => ("setStyle", false),
        (_, Some(PropModifier::Prop)) => ("setDOMProp", true),
        (_, Some(PropModifier::Attr)) => ("setAttr", true),
        _ => ("setDynamicProp", true),
    }
}

fn runtime_key(prop: &DirectiveTransformResult, ctx: &mut CodegenContext) -> String {
    let code = prop.key.content();
    if prop.runtime_camelize {
        format!("{}({})", ctx.helper("camelize"), code)
    } else {
        code.to_string()
    }
}

fn gen_prop_key_argument(prop: &DirectiveTransformResult, ctx: &mut CodegenContext) {
    match prop.static_key() {
        Some(name) => ctx.push(&to_string_literal(name)),
        None => {
            let key = runtime_key(prop, ctx);
            ctx.push(&key);
        }
    }
}

/// One `_setX(nX, ...)` call per prop.
pub fn gen_set_prop(oper: &SetPropIRNode, ctx: &mut CodegenContext) {
    for prop in &oper.props {
        let (setter, with_key) = prop_setter(prop);
        let setter = ctx.vapor_helper(setter);

        let mut args: Vec<CodeFragment<'_>> = vec![oper.element.to_string().into()];
        if with_key {
            args.push(gen(move |ctx| gen_prop_key_argument(prop, ctx)));
        }
        args.push(gen(move |ctx| gen_expression(&prop.value, ctx)));

        ctx.newline();
        ctx.push_fn_call(&setter, args);
    }
}

/// Object key for `prop`, with the modifier prefix applied.
fn object_property<'a>(
    prop: &'a DirectiveTransformResult,
    ctx: &mut CodegenContext,
) -> ObjectProperty<'a> {
    let prefix = prop.modifier.map(|m| m.as_str());
    let key = match prop.static_key() {
        Some(name) => PropertyKey::Static(format!("{}{}", prefix.unwrap_or(""), name)),
        None => {
            let code = runtime_key(prop, ctx);
            match prefix {
                Some(prefix) => PropertyKey::Computed(format!("\"{}\" + {}", prefix, code)),
                None => PropertyKey::Computed(code),
            }
        }
    };
    ObjectProperty {
        key,
        value: &prop.value,
    }
}

pub fn gen_literal_object_props(props: &[DirectiveTransformResult], ctx: &mut CodegenContext) {
    let properties: Vec<ObjectProperty<'_>> =
        props.iter().map(|prop| object_property(prop, ctx)).collect();
    gen_object_expression(&properties, ctx);
}

/// `_setBatchProps(nX, { ... })`
pub fn gen_set_batch_props(oper: &SetBatchPropsIRNode, ctx: &mut CodegenContext) {
    let helper = ctx.vapor_helper("setBatchProps");
    ctx.newline();
    ctx.push_fn_call(
        &helper,
        vec![
            oper.element.to_string().into(),
            gen(|ctx| gen_literal_object_props(&oper.props, ctx)),
        ],
    );
}

/// Merge items in source order: groups as object literals, spreads as written.
pub fn gen_merge_items(items: &[MergeItem], ctx: &mut CodegenContext) {
    let fragments = items
        .iter()
        .map(|item| match item {
            MergeItem::Group(props) => gen(move |ctx| gen_literal_object_props(props, ctx)),
            MergeItem::Spread(exp) => gen(move |ctx| gen_expression(exp, ctx)),
        })
        .collect();
    ctx.push_multi(("[", "]", ", "), fragments);
}

/// `_mergeBatchProps(nX, [a, { ... }, b])`
pub fn gen_merge_batch_props(oper: &SetMergeBatchPropsIRNode, ctx: &mut CodegenContext) {
    let helper = ctx.vapor_helper("mergeBatchProps");
    ctx.newline();
    ctx.push_fn_call(
        &helper,
        vec![
            oper.element.to_string().into(),
            gen(|ctx| gen_merge_items(&oper.merge_items, ctx)),
        ],
    );
}

/// Object literal text for `props`, starting at indent zero.
pub fn render_properties(props: &[DirectiveTransformResult]) -> String {
    let mut ctx = CodegenContext::new(CompilerOptions::default());
    gen_literal_object_props(props, &mut ctx);
    ctx.to_source()
}

/// Array literal text for `items`, starting at indent zero.
pub fn render_merge_items(items: &[MergeItem]) -> String {
    let mut ctx = CodegenContext::new(CompilerOptions::default());
    gen_merge_items(items, &mut ctx);
    ctx.to_source()
}
