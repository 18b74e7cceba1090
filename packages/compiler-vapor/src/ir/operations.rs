//! IR Operations
//!
//! One node per runtime action the generated render function performs on an
//! element. Operations are created by the transforms, stored on a block (either
//! directly or inside an effect) and consumed once by the generators.

use crate::ast::DirectiveNode;
use crate::ir::handle::ElementRef;
use crate::ir::{BlockIRNode, DirectiveTransformResult, IRExpression, MergeItem};
use crate::parse_util::SourceLocation;
use serde::Serialize;

/// Discriminant of an [`OperationNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IRNodeType {
    SetProp,
    SetBatchProps,
    SetMergeBatchProps,
    WithDirective,
    If,
}

/// Fine-grained update of statically keyed props.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetPropIRNode {
    pub element: ElementRef,
    pub props: Vec<DirectiveTransformResult>,
    pub loc: SourceLocation,
}

/// Whole-object update, used when the set of keys itself can change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetBatchPropsIRNode {
    pub element: ElementRef,
    pub props: Vec<DirectiveTransformResult>,
    pub loc: SourceLocation,
}

/// Runtime merge of object groups and spread expressions, applied left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetMergeBatchPropsIRNode {
    pub element: ElementRef,
    pub merge_items: Vec<MergeItem>,
    pub loc: SourceLocation,
}

/// Attaches a directive that has no compile-time transform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithDirectiveIRNode {
    pub element: ElementRef,
    pub dir: DirectiveNode,
    pub loc: SourceLocation,
}

/// Conditional rendering of one of two blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfIRNode {
    pub id: ElementRef,
    pub condition: IRExpression,
    pub positive: BlockIRNode,
    pub negative: Option<Box<IfBranch>>,
    pub loc: SourceLocation,
}

/// The `else` side of an [`IfIRNode`]: a plain block or another condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IfBranch {
    Block(BlockIRNode),
    If(IfIRNode),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OperationNode {
    SetProp(SetPropIRNode),
    SetBatchProps(SetBatchPropsIRNode),
    SetMergeBatchProps(SetMergeBatchPropsIRNode),
    WithDirective(WithDirectiveIRNode),
    If(Box<IfIRNode>),
}

impl OperationNode {
    pub fn kind(&self) -> IRNodeType {
        match self {
            OperationNode::SetProp(_) => IRNodeType::SetProp,
            OperationNode::SetBatchProps(_) => IRNodeType::SetBatchProps,
            OperationNode::SetMergeBatchProps(_) => IRNodeType::SetMergeBatchProps,
            OperationNode::WithDirective(_) => IRNodeType::WithDirective,
            OperationNode::If(_) => IRNodeType::If,
        }
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            OperationNode::SetProp(op) => &op.loc,
            OperationNode::SetBatchProps(op) => &op.loc,
            OperationNode::SetMergeBatchProps(op) => &op.loc,
            OperationNode::WithDirective(op) => &op.loc,
            OperationNode::If(op) => &op.loc,
        }
    }

    /// Element the operation writes to. For `If` this is the fragment it creates.
    pub fn element(&self) -> ElementRef {
        match self {
            OperationNode::SetProp(op) => op.element,
            OperationNode::SetBatchProps(op) => op.element,
            OperationNode::SetMergeBatchProps(op) => op.element,
            OperationNode::WithDirective(op) => op.element,
            OperationNode::If(op) => op.id,
        }
    }

    /// Every expression the operation reads, in source order.
    pub fn expressions(&self) -> Vec<&IRExpression> {
        fn props_expressions(props: &[DirectiveTransformResult]) -> Vec<&IRExpression> {
            props.iter().flat_map(|p| [&p.key, &p.value]).collect()
        }

        match self {
            OperationNode::SetProp(op) => props_expressions(&op.props),
            OperationNode::SetBatchProps(op) => props_expressions(&op.props),
            OperationNode::SetMergeBatchProps(op) => op
                .merge_items
                .iter()
                .flat_map(|item| match item {
                    MergeItem::Group(props) => props_expressions(props),
                    MergeItem::Spread(exp) => vec![exp],
                })
                .collect(),
            OperationNode::WithDirective(_) => Vec::new(),
            OperationNode::If(op) => vec![&op.condition],
        }
    }
}
