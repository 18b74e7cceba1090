//! v-bind Transform Tests

use compiler_vapor::ast::{create_simple_expression, DirectiveNode, ElementNode};
use compiler_vapor::ir::{DirectiveTransformResult, PropModifier};
use compiler_vapor::transforms::{transform_v_bind, DirectiveTransforms, TransformContext};
use compiler_vapor::{CompilerOptions, ErrorCode};
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn context() -> TransformContext {
    TransformContext::new(CompilerOptions::default(), Rc::new(DirectiveTransforms::builtin()))
}

fn run(dir: DirectiveNode, ctx: &mut TransformContext) -> Option<DirectiveTransformResult> {
    transform_v_bind(&dir, &ElementNode::new("div", Vec::new()), ctx)
}

fn bind(arg: &str, arg_static: bool, exp: Option<&str>) -> DirectiveNode {
    DirectiveNode::new(
        "bind",
        Some(create_simple_expression(arg, arg_static)),
        exp.map(|e| create_simple_expression(e, false)),
    )
}

#[test]
fn should_pass_key_and_value_through() {
    let mut ctx = context();
    let result = run(bind("id", true, Some("foo")), &mut ctx).unwrap();
    assert_eq!(result.key.content(), "id");
    assert!(result.key.is_constant());
    assert_eq!(result.value.content(), "foo");
    assert!(!result.value.is_constant());
    assert_eq!(result.modifier, None);
    assert!(!result.runtime_camelize);
}

#[test]
fn should_expand_same_name_shorthand() {
    let mut ctx = context();
    let result = run(bind("data-id", true, None), &mut ctx).unwrap();
    assert_eq!(result.key.content(), "data-id");
    assert_eq!(result.value.content(), "dataId");
    assert!(ctx.errors().is_empty());
}

#[test]
fn should_reject_same_name_shorthand_with_dynamic_argument() {
    let mut ctx = context();
    assert!(run(bind("key", false, None), &mut ctx).is_none());
    assert_eq!(ctx.errors().len(), 1);
    assert_eq!(ctx.errors()[0].code, ErrorCode::VBindInvalidSameNameArgument);
}

#[test]
fn should_drop_reserved_static_keys() {
    let mut ctx = context();
    assert!(run(bind("key", true, Some("id")), &mut ctx).is_none());
    assert!(ctx.errors().is_empty());
}

#[test]
fn should_camelize_static_key_at_compile_time() {
    let mut ctx = context();
    let result = run(
        bind("foo-bar", true, Some("x")).with_modifiers(["camel"]),
        &mut ctx,
    )
    .unwrap();
    assert_eq!(result.key.content(), "fooBar");
    assert!(!result.runtime_camelize);
}

#[test]
fn should_camelize_dynamic_key_at_runtime() {
    let mut ctx = context();
    let result = run(bind("name", false, Some("x")).with_modifiers(["camel"]), &mut ctx).unwrap();
    assert_eq!(result.key.content(), "name");
    assert!(result.runtime_camelize);
}

#[test]
fn should_record_prop_and_attr_modifiers() {
    let mut ctx = context();
    let prop = run(bind("innerHTML", true, Some("html")).with_modifiers(["prop"]), &mut ctx).unwrap();
    assert_eq!(prop.modifier, Some(PropModifier::Prop));
    let attr = run(bind("width", true, Some("w")).with_modifiers(["attr"]), &mut ctx).unwrap();
    assert_eq!(attr.modifier, Some(PropModifier::Attr));
}

#[test]
fn should_ignore_missing_argument() {
    let mut ctx = context();
    let dir = DirectiveNode::new("bind", None, Some(create_simple_expression("obj", false)));
    assert!(run(dir, &mut ctx).is_none());
}
