//! `v-bind` with an argument: `:id="foo"`, `:[key]="value"`, `:title`.
//!
//! Bare `v-bind="obj"` is a spread and never reaches this handler.

use crate::ast::{create_simple_expression, DirectiveNode, ElementNode};
use crate::errors::{create_compiler_error, ErrorCode};
use crate::ir::{DirectiveTransformResult, PropModifier};
use crate::shared::{camelize, is_reserved_prop};
use crate::transforms::TransformContext;

pub fn transform_v_bind(
    dir: &DirectiveNode,
    _node: &ElementNode,
    context: &mut TransformContext,
) -> Option<DirectiveTransformResult> {
    let mut arg = dir.arg.clone()?;
    if arg.is_static && is_reserved_prop(&arg.content) {
        return None;
    }

    let exp = match &dir.exp {
        Some(exp) => exp.clone(),
        None => {
            // same-name shorthand, `:title` -> `:title="title"`
            if !arg.is_static {
                context.on_error(create_compiler_error(
                    ErrorCode::VBindInvalidSameNameArgument,
                    Some(arg.loc.clone()),
                ));
                return None;
            }
            create_simple_expression(camelize(&arg.content), false).with_loc(arg.loc.clone())
        }
    };

    let mut runtime_camelize = false;
    if dir.has_modifier("camel") {
        if arg.is_static {
            arg.content = camelize(&arg.content);
        } else {
            runtime_camelize = true;
        }
    }

    let modifier = if dir.has_modifier("prop") {
        Some(PropModifier::Prop)
    } else if dir.has_modifier("attr") {
        Some(PropModifier::Attr)
    } else {
        None
    };

    Some(
        DirectiveTransformResult::new(arg, exp)
            .with_modifier(modifier)
            .with_runtime_camelize(runtime_camelize),
    )
}
