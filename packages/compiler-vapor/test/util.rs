//! Builders shared by the integration tests.
#![allow(dead_code)]

use compiler_vapor::ast::{create_simple_expression, DirectiveNode, ElementNode, PropNode};
use compiler_vapor::ir::RootIRNode;
use compiler_vapor::transforms::{compile_element, DirectiveTransforms};
use compiler_vapor::{CompilerError, CompilerOptions};
use std::rc::Rc;

/// `:arg="exp"`
pub fn bind(arg: &str, exp: &str) -> PropNode {
    DirectiveNode::new(
        "bind",
        Some(create_simple_expression(arg, true)),
        Some(create_simple_expression(exp, false)),
    )
    .into()
}

/// `:[arg]="exp"`
pub fn bind_dynamic(arg: &str, exp: &str) -> PropNode {
    DirectiveNode::new(
        "bind",
        Some(create_simple_expression(arg, false)),
        Some(create_simple_expression(exp, false)),
    )
    .into()
}

/// `v-bind="exp"`
pub fn spread(exp: &str) -> PropNode {
    DirectiveNode::new("bind", None, Some(create_simple_expression(exp, false))).into()
}

/// `@event="exp"`
pub fn on(event: &str, exp: &str) -> PropNode {
    DirectiveNode::new(
        "on",
        Some(create_simple_expression(event, true)),
        Some(create_simple_expression(exp, false)),
    )
    .into()
}

pub fn with_modifiers(prop: PropNode, modifiers: &[&str]) -> PropNode {
    match prop {
        PropNode::Directive(dir) => dir.with_modifiers(modifiers.iter().copied()).into(),
        other => other,
    }
}

pub fn compile_with(
    transforms: DirectiveTransforms,
    props: Vec<PropNode>,
) -> (RootIRNode, Vec<CompilerError>) {
    compile_element(
        &ElementNode::new("div", props),
        CompilerOptions::default(),
        Rc::new(transforms),
    )
}

pub fn compile_props(props: Vec<PropNode>) -> (RootIRNode, Vec<CompilerError>) {
    compile_with(DirectiveTransforms::builtin(), props)
}

/// Render code for a `<div>` with `props`, template factory included.
pub fn render_props(props: Vec<PropNode>) -> String {
    let (root, errors) = compile_props(props);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    compiler_vapor::generate(&root, &CompilerOptions::default()).code
}
