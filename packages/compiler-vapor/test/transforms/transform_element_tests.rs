//! Element Transform Tests
//!
//! Prop classification, operation planning and effect registration for a
//! single element.

use compiler_vapor::ast::{create_simple_expression, DirectiveNode, ElementNode, PropNode};
use compiler_vapor::ir::{
    DirectiveTransformResult, IRExpression, MergeItem, OperationNode,
};
use compiler_vapor::transforms::{compile_element, DirectiveTransforms, TransformContext};
use compiler_vapor::{CompilerOptions, ErrorCode};
use pretty_assertions::assert_eq;
use std::rc::Rc;

#[path = "../util.rs"]
mod util;
use util::{bind, bind_dynamic, compile_props, compile_with, on, spread};

fn keys(props: &[DirectiveTransformResult]) -> Vec<&str> {
    props.iter().map(|p| p.key.content()).collect()
}

fn contents(expressions: &[IRExpression]) -> Vec<&str> {
    expressions.iter().map(|e| e.content()).collect()
}

#[test]
fn should_write_static_attributes_into_template() {
    let (root, errors) = compile_props(vec![
        PropNode::attr("id", Some("app")),
        PropNode::attr("disabled", None),
    ]);
    assert!(errors.is_empty());
    assert_eq!(root.template, vec![r#"<div id="app" disabled></div>"#]);
    assert!(root.block.is_empty());
}

#[test]
fn should_not_close_void_elements() {
    let (root, _) = compile_element(
        &ElementNode::new("input", vec![PropNode::attr("type", Some("text"))]),
        CompilerOptions::default(),
        Rc::new(DirectiveTransforms::builtin()),
    );
    assert_eq!(root.template, vec![r#"<input type="text">"#]);
}

#[test]
fn should_skip_reserved_props() {
    let (root, _) = compile_props(vec![PropNode::attr("key", Some("1")), bind("ref", "el")]);
    assert_eq!(root.template, vec!["<div></div>"]);
    assert!(root.block.is_empty());
}

#[test]
fn should_batch_when_any_key_is_dynamic() {
    let (root, errors) = compile_props(vec![
        bind("class", "foo"),
        on("click", "handler"),
        bind_dynamic("id", "dynamicExpr"),
    ]);
    assert!(errors.is_empty());
    assert!(root.block.operation.is_empty());
    assert_eq!(root.block.effect.len(), 1);

    let effect = &root.block.effect[0];
    assert_eq!(
        contents(&effect.expressions),
        vec!["foo", "handler", "id", "dynamicExpr"]
    );
    assert_eq!(effect.operations.len(), 1);
    match &effect.operations[0] {
        OperationNode::SetBatchProps(oper) => {
            assert_eq!(oper.element.to_string(), "n0");
            assert_eq!(keys(&oper.props), vec!["class", "onClick", "id"]);
        }
        other => panic!("expected SetBatchProps, got {:?}", other),
    }
}

#[test]
fn should_merge_spreads_in_source_order() {
    let (root, errors) = compile_props(vec![spread("spreadA"), bind("foo", "bar"), spread("spreadB")]);
    assert!(errors.is_empty());
    assert_eq!(root.block.effect.len(), 1);

    let effect = &root.block.effect[0];
    assert_eq!(contents(&effect.expressions), vec!["spreadA", "bar", "spreadB"]);
    match &effect.operations[0] {
        OperationNode::SetMergeBatchProps(oper) => {
            assert_eq!(oper.merge_items.len(), 3);
            assert!(matches!(&oper.merge_items[0], MergeItem::Spread(e) if e.content() == "spreadA"));
            assert!(matches!(&oper.merge_items[1], MergeItem::Group(g) if keys(g) == vec!["foo"]));
            assert!(matches!(&oper.merge_items[2], MergeItem::Spread(e) if e.content() == "spreadB"));
        }
        other => panic!("expected SetMergeBatchProps, got {:?}", other),
    }
}

#[test]
fn should_register_one_effect_per_static_prop() {
    let (root, _) = compile_props(vec![bind("id", "foo"), bind("title", "msg")]);
    assert_eq!(root.block.effect.len(), 2);
    for (effect, key) in root.block.effect.iter().zip(["id", "title"]) {
        match &effect.operations[..] {
            [OperationNode::SetProp(oper)] => assert_eq!(keys(&oper.props), vec![key]),
            other => panic!("expected one SetProp, got {:?}", other),
        }
    }
    assert_eq!(contents(&root.block.effect[1].expressions), vec!["msg"]);
}

#[test]
fn should_keep_dynamic_handler_key_fine_grained() {
    let event = DirectiveNode::new(
        "on",
        Some(create_simple_expression("event", false)),
        Some(create_simple_expression("handler", false)),
    );
    let (root, _) = compile_props(vec![event.into()]);
    assert_eq!(root.block.effect.len(), 1);
    let effect = &root.block.effect[0];
    assert!(matches!(&effect.operations[0], OperationNode::SetProp(_)));
    assert_eq!(
        contents(&effect.expressions),
        vec!["_toHandlerKey(event)", "handler"]
    );
    assert!(root.helpers.contains("toHandlerKey"));
}

#[test]
fn should_report_spread_without_expression() {
    let (root, errors) = compile_props(vec![
        DirectiveNode::new("bind", None, None).into(),
        bind("id", "foo"),
    ]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::VBindNoExpression);
    assert_eq!(errors[0].code.code(), 34);
    assert_eq!(root.block.effect.len(), 1);
    assert!(matches!(&root.block.effect[0].operations[0], OperationNode::SetProp(_)));
}

#[test]
fn should_attach_custom_directives_immediately() {
    let tooltip = DirectiveNode::new("tooltip", None, Some(create_simple_expression("msg", false)));
    let (root, errors) = compile_props(vec![bind("id", "foo"), tooltip.into()]);
    assert!(errors.is_empty());
    assert_eq!(root.block.operation.len(), 1);
    match &root.block.operation[0] {
        OperationNode::WithDirective(oper) => {
            assert_eq!(oper.dir.name, "tooltip");
            assert_eq!(oper.element.as_usize(), 0);
        }
        other => panic!("expected WithDirective, got {:?}", other),
    }
    assert_eq!(root.block.effect.len(), 1);
}

#[test]
fn should_skip_builtin_directives_without_handler() {
    let show = DirectiveNode::new("show", None, Some(create_simple_expression("visible", false)));
    let (root, errors) = compile_props(vec![show.into()]);
    assert!(errors.is_empty());
    assert!(root.block.is_empty());
    assert!(root.block.dynamic.children[0].id.is_none());
}

#[test]
fn should_store_constant_props_as_operations() {
    let transforms = DirectiveTransforms::builtin().with(
        "static-title",
        |_: &DirectiveNode,
         _: &ElementNode,
         _: &mut TransformContext|
         -> Option<DirectiveTransformResult> {
            Some(DirectiveTransformResult::new(
                create_simple_expression("title", true),
                IRExpression::from("\"hello\""),
            ))
        },
    );
    let title = DirectiveNode::new("static-title", None, None);
    let (root, _) = compile_with(transforms, vec![title.into()]);
    assert!(root.block.effect.is_empty());
    assert_eq!(root.block.operation.len(), 1);
}

#[test]
fn should_reference_element_once() {
    let (root, _) = compile_props(vec![bind("id", "a"), bind("title", "b"), spread("c")]);
    let child = &root.block.dynamic.children[0];
    assert_eq!(child.id.map(|id| id.as_usize()), Some(0));
    assert!(child.is_referenced());
}

#[test]
fn should_escape_quotes_in_static_attribute_values() {
    let (root, _) = compile_props(vec![PropNode::attr("title", Some(r#"a"b"#))]);
    assert_eq!(root.template, vec![r#"<div title="a&quot;b"></div>"#]);
}
