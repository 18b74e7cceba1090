//! Intermediate Representation
//!
//! Typed nodes produced by the transforms and rendered by the generators.

pub mod handle;
pub mod operations;

pub use handle::ElementRef;
pub use operations::*;

use crate::ast::SimpleExpressionNode;
use bitflags::bitflags;
use indexmap::IndexSet;
use serde::Serialize;

/// An expression as the IR sees it: raw code text, or a template expression node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IRExpression {
    /// Code emitted verbatim. Always treated as constant.
    Literal(String),
    Simple(SimpleExpressionNode),
}

impl IRExpression {
    pub fn content(&self) -> &str {
        match self {
            IRExpression::Literal(s) => s,
            IRExpression::Simple(exp) => &exp.content,
        }
    }

    /// Known at compile time; never needs to be tracked as a dependency.
    pub fn is_constant(&self) -> bool {
        match self {
            IRExpression::Literal(_) => true,
            IRExpression::Simple(exp) => exp.is_static,
        }
    }

    pub fn is_handler_key(&self) -> bool {
        matches!(self, IRExpression::Simple(exp) if exp.is_handler_key)
    }
}

impl From<SimpleExpressionNode> for IRExpression {
    fn from(exp: SimpleExpressionNode) -> Self {
        IRExpression::Simple(exp)
    }
}

impl From<&str> for IRExpression {
    fn from(s: &str) -> Self {
        IRExpression::Literal(s.to_string())
    }
}

/// Binding flavour requested by `.prop` / `.attr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PropModifier {
    /// `.prop`: set as a DOM property.
    Prop,
    /// `.attr`: set as an attribute.
    Attr,
}

impl PropModifier {
    /// Key prefix understood by the runtime's batch/merge helpers.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropModifier::Prop => ".",
            PropModifier::Attr => "^",
        }
    }
}

/// Normalized output of a directive transform: one key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveTransformResult {
    pub key: IRExpression,
    pub value: IRExpression,
    pub modifier: Option<PropModifier>,
    /// The key is dynamic and must be camelized at runtime.
    pub runtime_camelize: bool,
}

impl DirectiveTransformResult {
    pub fn new(key: impl Into<IRExpression>, value: impl Into<IRExpression>) -> Self {
        DirectiveTransformResult {
            key: key.into(),
            value: value.into(),
            modifier: None,
            runtime_camelize: false,
        }
    }

    pub fn with_modifier(mut self, modifier: Option<PropModifier>) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn with_runtime_camelize(mut self, runtime_camelize: bool) -> Self {
        self.runtime_camelize = runtime_camelize;
        self
    }

    /// Static key text, if the key is known at compile time.
    pub fn static_key(&self) -> Option<&str> {
        self.key.is_constant().then(|| self.key.content())
    }
}

/// One argument of a runtime props merge, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum MergeItem {
    /// Props written directly on the element, rendered as an object literal.
    Group(Vec<DirectiveTransformResult>),
    /// Object spread in by a bare `v-bind="obj"`.
    Spread(IRExpression),
}

/// Operations re-run whenever one of `expressions` changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IREffect {
    pub expressions: Vec<IRExpression>,
    pub operations: Vec<OperationNode>,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DynamicFlag: u8 {
        const NONE = 0;
        /// The node is referenced and needs to be saved as a variable.
        const REFERENCED = 1;
        /// The node is not generated from template, but is generated dynamically.
        const NON_TEMPLATE = 1 << 1;
        /// The node needs to be inserted back into the template.
        const INSERT = 1 << 2;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IRDynamicInfo {
    pub id: Option<ElementRef>,
    #[serde(skip)]
    pub flags: DynamicFlag,
    pub children: Vec<IRDynamicInfo>,
}

impl IRDynamicInfo {
    pub fn is_referenced(&self) -> bool {
        self.flags.contains(DynamicFlag::REFERENCED)
    }
}

/// A render scope: the operations it runs once, and the effects it keeps alive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockIRNode {
    pub dynamic: IRDynamicInfo,
    pub effect: Vec<IREffect>,
    pub operation: Vec<OperationNode>,
}

impl BlockIRNode {
    pub fn new() -> Self {
        BlockIRNode::default()
    }

    pub fn is_empty(&self) -> bool {
        self.effect.is_empty() && self.operation.is_empty()
    }
}

/// Result of transforming one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RootIRNode {
    /// Static template strings, one factory each.
    pub template: Vec<String>,
    /// Core helpers referenced by expressions built during transform.
    pub helpers: IndexSet<String>,
    pub block: BlockIRNode,
}
