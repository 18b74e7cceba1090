//! Blocks, Effects and Conditionals

use crate::generators::context::gen;
use crate::generators::directive::gen_with_directive;
use crate::generators::expression::gen_expression;
use crate::generators::prop::{gen_merge_batch_props, gen_set_batch_props, gen_set_prop};
use crate::generators::CodegenContext;
use crate::ir::{BlockIRNode, IREffect, IfBranch, IfIRNode, OperationNode};

pub fn gen_operation(oper: &OperationNode, ctx: &mut CodegenContext) {
    match oper {
        OperationNode::SetProp(oper) => gen_set_prop(oper, ctx),
        OperationNode::SetBatchProps(oper) => gen_set_batch_props(oper, ctx),
        OperationNode::SetMergeBatchProps(oper) => gen_merge_batch_props(oper, ctx),
        OperationNode::WithDirective(oper) => gen_with_directive(oper, ctx),
        OperationNode::If(oper) => gen_if(oper, ctx, false),
    }
}

pub fn gen_operations(opers: &[OperationNode], ctx: &mut CodegenContext) {
    for oper in opers {
        gen_operation(oper, ctx);
    }
}

/// One `_renderEffect(() => { ... })` per effect.
pub fn gen_effects(effects: &[IREffect], ctx: &mut CodegenContext) {
    for effect in effects {
        let render_effect = ctx.vapor_helper("renderEffect");
        ctx.newline();
        ctx.push(&render_effect);
        ctx.push("(() => {");
        ctx.with_indent(|ctx| gen_operations(&effect.operations, ctx));
        ctx.newline();
        ctx.push("})");
    }
}

/// Operations first, then effects, then the block's return value if it has one.
pub fn gen_block_content(block: &BlockIRNode, ctx: &mut CodegenContext) {
    gen_operations(&block.operation, ctx);
    gen_effects(&block.effect, ctx);
    if let Some(id) = block.dynamic.id {
        ctx.newline();
        ctx.push(&format!("return {}", id));
    }
}

/// `() => { ... }`
pub fn gen_block(block: &BlockIRNode, ctx: &mut CodegenContext) {
    if block.is_empty() && block.dynamic.id.is_none() {
        ctx.push("() => {}");
        return;
    }
    ctx.push("() => {");
    ctx.with_indent(|ctx| gen_block_content(block, ctx));
    ctx.newline();
    ctx.push("}");
}

/// `const nX = _createIf(() => (cond), () => { ... }, () => { ... })`
///
/// An `else if` chain nests further `_createIf` calls in the negative slot.
pub fn gen_if(oper: &IfIRNode, ctx: &mut CodegenContext, is_nested: bool) {
    let create_if = ctx.vapor_helper("createIf");
    if !is_nested {
        ctx.newline();
        ctx.push(&format!("const {} = ", oper.id));
    }

    let mut args = vec![
        gen(|ctx| {
            ctx.push("() => (");
            gen_expression(&oper.condition, ctx);
            ctx.push(")");
        }),
        gen(|ctx| gen_block(&oper.positive, ctx)),
    ];
    if let Some(negative) = &oper.negative {
        args.push(gen(move |ctx| match negative.as_ref() {
            IfBranch::Block(block) => gen_block(block, ctx),
            IfBranch::If(nested) => {
                ctx.push("() => ");
                gen_if(nested, ctx, true);
            }
        }));
    }
    ctx.push_fn_call(&create_if, args);
}
