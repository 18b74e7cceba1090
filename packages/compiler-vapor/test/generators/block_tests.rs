//! Block, Effect and Module Rendering Tests

use compiler_vapor::ast::{create_simple_expression, DirectiveNode, ElementNode, PropNode};
use compiler_vapor::generators::{gen_if, CodegenContext};
use compiler_vapor::ir::{
    BlockIRNode, DirectiveTransformResult, ElementRef, IfBranch, IfIRNode, OperationNode,
    RootIRNode, SetPropIRNode,
};
use compiler_vapor::parse_util::SourceLocation;
use compiler_vapor::{compile, generate, CompilerOptions, ErrorCode};
use pretty_assertions::assert_eq;

#[path = "../util.rs"]
mod util;
use util::{bind, compile_props};

fn set_class(element: usize, value: &str) -> OperationNode {
    OperationNode::SetProp(SetPropIRNode {
        element: ElementRef::new(element),
        props: vec![DirectiveTransformResult::new(
            create_simple_expression("class", true),
            create_simple_expression(value, false),
        )],
        loc: SourceLocation::stub(),
    })
}

fn if_node(id: usize, condition: &str, positive: BlockIRNode, negative: Option<IfBranch>) -> IfIRNode {
    IfIRNode {
        id: ElementRef::new(id),
        condition: create_simple_expression(condition, false).into(),
        positive,
        negative: negative.map(Box::new),
        loc: SourceLocation::stub(),
    }
}

#[test]
fn should_render_if_with_else_if_chain() {
    let mut positive = BlockIRNode::new();
    positive.dynamic.id = Some(ElementRef::new(2));
    positive.operation.push(set_class(2, "a"));

    let mut fallback = BlockIRNode::new();
    fallback.operation.push(set_class(4, "b"));

    let nested = if_node(3, "other", BlockIRNode::new(), Some(IfBranch::Block(fallback)));
    let oper = if_node(1, "ok", positive, Some(IfBranch::If(nested)));

    let mut ctx = CodegenContext::new(CompilerOptions::default());
    gen_if(&oper, &mut ctx, false);
    assert_eq!(
        ctx.to_source(),
        r#"const n1 = _createIf(() => (ok), () => {
  _setClass(n2, a)
  return n2
}, () => _createIf(() => (other), () => {}, () => {
  _setClass(n4, b)
}))"#
    );
    let helpers: Vec<&str> = ctx.vapor_helpers().iter().map(String::as_str).collect();
    assert_eq!(helpers, vec!["createIf", "setClass"]);
}

#[test]
fn should_render_if_operation_inside_block() {
    let mut root = RootIRNode::default();
    root.block
        .operation
        .push(OperationNode::If(Box::new(if_node(0, "show", BlockIRNode::new(), None))));
    let result = generate(&root, &CompilerOptions::default());
    assert_eq!(result.code, "const n0 = _createIf(() => (show), () => {})");
}

#[test]
fn should_render_operations_before_effects() {
    let tooltip = DirectiveNode::new("tooltip", None, Some(create_simple_expression("msg", false)));
    let (root, _) = compile_props(vec![bind("id", "foo"), tooltip.into()]);
    let result = generate(&root, &CompilerOptions::default());
    assert_eq!(
        result.code,
        r#"const t0 = _template("<div></div>")
const n0 = t0()
_withDirectives(n0, [[_resolveDirective("tooltip"), () => msg]])
_renderEffect(() => {
  _setDynamicProp(n0, "id", foo)
})"#
    );
    assert_eq!(
        result.preamble,
        r#"import { template as _template, withDirectives as _withDirectives, renderEffect as _renderEffect, setDynamicProp as _setDynamicProp } from "vue/vapor";
import { resolveDirective as _resolveDirective } from "vue";"#
    );
}

#[test]
fn should_collect_transform_helpers_into_preamble() {
    let node = ElementNode::new(
        "button",
        vec![DirectiveNode::new(
            "on",
            Some(create_simple_expression("click", true)),
            Some(create_simple_expression("go", false)),
        )
        .with_modifiers(["stop"])
        .into()],
    );
    let output = compile(&node, &CompilerOptions::default());
    assert!(output.errors.is_empty());
    assert_eq!(output.codegen.helpers, vec!["withModifiers"]);
    assert_eq!(
        output.codegen.code,
        r#"const t0 = _template("<button></button>")
const n0 = t0()
_renderEffect(() => {
  _setDynamicProp(n0, "onClick", _withModifiers(go, ["stop"]))
})"#
    );
}

#[test]
fn should_report_errors_alongside_code() {
    let node = ElementNode::new(
        "div",
        vec![
            PropNode::attr("id", Some("app")),
            DirectiveNode::new("on", Some(create_simple_expression("click", true)), None).into(),
        ],
    );
    let output = compile(&node, &CompilerOptions::default());
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::VOnNoExpression);
    assert_eq!(output.codegen.code, r#"const t0 = _template("<div id=\"app\"></div>")"#);
}

#[test]
fn should_declare_referenced_element_before_using_it() {
    let node = ElementNode::new(
        "div",
        vec![
            DirectiveNode::new("bind", None, Some(create_simple_expression("attrs", false))).into(),
            PropNode::attr("id", Some("app")),
        ],
    );
    let output = compile(&node, &CompilerOptions::default());
    assert!(output.errors.is_empty());
    assert_eq!(
        format!("{}\n\n{}", output.codegen.preamble, output.codegen.code),
        r#"import { template as _template, renderEffect as _renderEffect, mergeBatchProps as _mergeBatchProps } from "vue/vapor";

const t0 = _template("<div id=\"app\"></div>")
const n0 = t0()
_renderEffect(() => {
  _mergeBatchProps(n0, [attrs])
})"#
    );
}

#[test]
fn should_not_declare_unreferenced_elements() {
    let output = compile(
        &ElementNode::new("div", vec![PropNode::attr("id", Some("app"))]),
        &CompilerOptions::default(),
    );
    assert!(!output.codegen.code.contains("const n0"));
}
