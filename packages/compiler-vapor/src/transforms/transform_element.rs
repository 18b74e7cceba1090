//! Element Transform
//!
//! Walks an element's props once, in source order. Static attributes go
//! straight into the opening-tag template, directives are dispatched to their
//! handlers, and bare `v-bind="obj"` spreads are kept in place. The collected
//! key/value pairs are then planned into prop-setting operations.

use crate::ast::{ElementNode, ElementType, PropNode};
use crate::errors::{create_compiler_error, ErrorCode};
use crate::ir::{
    DirectiveTransformResult, IRExpression, MergeItem, OperationNode, SetBatchPropsIRNode,
    SetMergeBatchPropsIRNode, SetPropIRNode, WithDirectiveIRNode,
};
use crate::shared::{is_reserved_prop, is_void_tag};
use crate::transforms::{DirectiveLookup, TransformContext};

/// Writes the element's template and registers the operations for its props.
/// Slots and `<template>` wrappers are left to other transforms.
pub fn transform_element(node: &ElementNode, context: &mut TransformContext) {
    if !matches!(node.tag_type, ElementType::Element | ElementType::Component) {
        return;
    }

    let tag = &node.tag;
    context.node.template.push('<');
    context.node.template.push_str(tag);
    if !node.props.is_empty() {
        build_props(node, context);
    }
    context.node.template.push('>');
    let children = context.node.children_template.concat();
    context.node.template.push_str(&children);

    if !is_void_tag(tag) {
        context.node.template.push_str(&format!("</{}>", tag));
    }
}

/// One classified prop, as fed to [`plan_props`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropEntry {
    /// Bare `v-bind="obj"`.
    Spread(IRExpression),
    /// Output of a directive handler.
    Prop(DirectiveTransformResult),
}

/// How an element's props are applied at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum PropsPlan {
    /// Nothing to set.
    Empty,
    /// All keys are static: one `SetProp` per prop, each with its own effect.
    FineGrained(Vec<DirectiveTransformResult>),
    /// Some key is dynamic, so the key set can change: one `SetBatchProps`.
    Batch {
        props: Vec<DirectiveTransformResult>,
        dependencies: Vec<IRExpression>,
    },
    /// At least one spread: one `SetMergeBatchProps` over groups and spreads.
    Merge {
        items: Vec<MergeItem>,
        dependencies: Vec<IRExpression>,
    },
}

impl PropsPlan {
    fn describe(&self) -> &'static str {
        match self {
            PropsPlan::Empty => "empty",
            PropsPlan::FineGrained(_) => "fine-grained",
            PropsPlan::Batch { .. } => "batch",
            PropsPlan::Merge { .. } => "merge",
        }
    }
}

fn flush_group(group: &mut Vec<DirectiveTransformResult>, items: &mut Vec<MergeItem>) {
    if !group.is_empty() {
        // TODO dedupe keys within a group; later duplicates currently win at runtime
        items.push(MergeItem::Group(std::mem::take(group)));
    }
}

/// Decide the operation shape for an element's classified props.
pub fn plan_props(entries: impl IntoIterator<Item = PropEntry>) -> PropsPlan {
    let mut current_group: Vec<DirectiveTransformResult> = Vec::new();
    let mut merge_items: Vec<MergeItem> = Vec::new();
    let mut dependencies: Vec<IRExpression> = Vec::new();

    for entry in entries {
        match entry {
            PropEntry::Spread(exp) => {
                flush_group(&mut current_group, &mut merge_items);
                dependencies.push(exp.clone());
                merge_items.push(MergeItem::Spread(exp));
            }
            PropEntry::Prop(prop) => {
                for exp in [&prop.key, &prop.value] {
                    if !exp.is_constant() {
                        dependencies.push(exp.clone());
                    }
                }
                current_group.push(prop);
            }
        }
    }

    if !merge_items.is_empty() {
        flush_group(&mut current_group, &mut merge_items);
        return PropsPlan::Merge {
            items: merge_items,
            dependencies,
        };
    }

    if current_group.is_empty() {
        return PropsPlan::Empty;
    }

    let has_dynamic_key = current_group
        .iter()
        .any(|prop| !prop.key.is_constant() && !prop.key.is_handler_key());
    if has_dynamic_key {
        PropsPlan::Batch {
            props: current_group,
            dependencies,
        }
    } else {
        PropsPlan::FineGrained(current_group)
    }
}

/// Turn a plan into operations and register each with its effect.
pub fn register_plan(plan: PropsPlan, node: &ElementNode, context: &mut TransformContext) {
    tracing::debug!(tag = %node.tag, plan = plan.describe(), "planned element props");

    match plan {
        PropsPlan::Empty => {}
        PropsPlan::FineGrained(props) => {
            for prop in props {
                let mut dependencies = Vec::with_capacity(2);
                if !prop.key.is_constant() {
                    dependencies.push(prop.key.clone());
                }
                dependencies.push(prop.value.clone());
                let element = context.reference();
                context.register_effect(
                    dependencies,
                    vec![OperationNode::SetProp(SetPropIRNode {
                        element,
                        props: vec![prop],
                        loc: node.loc.clone(),
                    })],
                );
            }
        }
        PropsPlan::Batch {
            props,
            dependencies,
        } => {
            let element = context.reference();
            context.register_effect(
                dependencies,
                vec![OperationNode::SetBatchProps(SetBatchPropsIRNode {
                    element,
                    props,
                    loc: node.loc.clone(),
                })],
            );
        }
        PropsPlan::Merge {
            items,
            dependencies,
        } => {
            let element = context.reference();
            context.register_effect(
                dependencies,
                vec![OperationNode::SetMergeBatchProps(SetMergeBatchPropsIRNode {
                    element,
                    merge_items: items,
                    loc: node.loc.clone(),
                })],
            );
        }
    }
}

fn build_props(node: &ElementNode, context: &mut TransformContext) {
    let mut entries = Vec::with_capacity(node.props.len());

    for prop in &node.props {
        if let PropNode::Directive(dir) = prop {
            if dir.name == "bind" && dir.arg.is_none() {
                match &dir.exp {
                    Some(exp) => entries.push(PropEntry::Spread(exp.clone().into())),
                    None => context.on_error(create_compiler_error(
                        ErrorCode::VBindNoExpression,
                        Some(dir.loc.clone()),
                    )),
                }
                continue;
            }
        }

        if let Some(result) = transform_prop(prop, node, context) {
            entries.push(PropEntry::Prop(result));
        }
    }

    register_plan(plan_props(entries), node, context);
}

/// Static attributes are appended to the opening tag with their value
/// double-quoted; a `"` inside the value is written as `&quot;`.
fn transform_prop(
    prop: &PropNode,
    node: &ElementNode,
    context: &mut TransformContext,
) -> Option<DirectiveTransformResult> {
    if is_reserved_prop(prop.name()) {
        return None;
    }

    let dir = match prop {
        PropNode::Attribute(attr) => {
            let template = &mut context.node.template;
            template.push(' ');
            template.push_str(&attr.name);
            if let Some(value) = &attr.value {
                template.push_str(&format!("=\"{}\"", value.replace('"', "&quot;")));
            }
            return None;
        }
        PropNode::Directive(dir) => dir,
    };

    let transforms = context.directive_transforms();
    match transforms.lookup(&dir.name) {
        DirectiveLookup::Handler(transform) => transform.transform(dir, node, context),
        DirectiveLookup::Custom => {
            let element = context.reference();
            context.register_operation([OperationNode::WithDirective(WithDirectiveIRNode {
                element,
                dir: dir.clone(),
                loc: dir.loc.clone(),
            })]);
            None
        }
        DirectiveLookup::BuiltIn => {
            tracing::trace!(directive = %dir.name, "no transform registered for built-in directive");
            None
        }
    }
}
