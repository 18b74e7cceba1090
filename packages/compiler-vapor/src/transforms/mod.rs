//! Transforms
//!
//! Lowers template elements into IR. The [`TransformContext`] owns every
//! accumulator a compilation unit writes to; directive handlers are looked up
//! by name in a [`DirectiveTransforms`] registry.

pub mod transform_element;
pub mod v_bind;
pub mod v_on;

pub use transform_element::{plan_props, register_plan, transform_element, PropEntry, PropsPlan};
pub use v_bind::transform_v_bind;
pub use v_on::{resolve_event_modifiers, transform_v_on, EventModifiers};

use crate::ast::{DirectiveNode, ElementNode};
use crate::config::CompilerOptions;
use crate::errors::CompilerError;
use crate::ir::{
    BlockIRNode, DirectiveTransformResult, DynamicFlag, ElementRef, IRDynamicInfo, IREffect,
    IRExpression, OperationNode, RootIRNode,
};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::rc::Rc;

/// Compile-time handler for one directive name.
pub trait DirectiveTransform {
    fn transform(
        &self,
        dir: &DirectiveNode,
        node: &ElementNode,
        context: &mut TransformContext,
    ) -> Option<DirectiveTransformResult>;
}

impl<F> DirectiveTransform for F
where
    F: Fn(&DirectiveNode, &ElementNode, &mut TransformContext) -> Option<DirectiveTransformResult>,
{
    fn transform(
        &self,
        dir: &DirectiveNode,
        node: &ElementNode,
        context: &mut TransformContext,
    ) -> Option<DirectiveTransformResult> {
        self(dir, node, context)
    }
}

/// Outcome of looking a directive name up in the registry.
pub enum DirectiveLookup<'a> {
    /// A handler is registered under this name.
    Handler(&'a dyn DirectiveTransform),
    /// Built-in directive without a registered handler; it is skipped.
    BuiltIn,
    /// User directive; it is attached at runtime.
    Custom,
}

/// Name -> handler table, kept in registration order.
#[derive(Default)]
pub struct DirectiveTransforms {
    transforms: IndexMap<String, Box<dyn DirectiveTransform>>,
}

impl DirectiveTransforms {
    pub fn new() -> Self {
        DirectiveTransforms::default()
    }

    /// Registry with the handlers this crate ships: `bind` and `on`.
    pub fn builtin() -> Self {
        DirectiveTransforms::new()
            .with("bind", transform_v_bind)
            .with("on", transform_v_on)
    }

    /// Register `transform` under `name`, replacing any previous handler.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        transform: impl DirectiveTransform + 'static,
    ) -> &mut Self {
        self.transforms.insert(name.into(), Box::new(transform));
        self
    }

    pub fn with(mut self, name: impl Into<String>, transform: impl DirectiveTransform + 'static) -> Self {
        self.register(name, transform);
        self
    }

    pub fn lookup(&self, name: &str) -> DirectiveLookup<'_> {
        match self.transforms.get(name) {
            Some(transform) => DirectiveLookup::Handler(transform.as_ref()),
            None if crate::shared::is_built_in_directive(name) => DirectiveLookup::BuiltIn,
            None => DirectiveLookup::Custom,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transforms.keys().map(String::as_str)
    }
}

impl fmt::Debug for DirectiveTransforms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Per-node accumulators, swapped in and out as an outer pipeline walks the tree.
#[derive(Debug, Clone, Default)]
pub struct NodeState {
    /// Opening-tag text (and, once the element is done, the whole element).
    pub template: String,
    /// Finished templates of the node's children, in order.
    pub children_template: Vec<String>,
    pub dynamic: IRDynamicInfo,
}

/// State for one compilation unit. Single writer: every transform call takes it
/// by `&mut` and nothing reads it until the unit is done.
pub struct TransformContext {
    pub options: CompilerOptions,
    directive_transforms: Rc<DirectiveTransforms>,
    pub node: NodeState,
    pub block: BlockIRNode,
    /// Core helpers referenced by generated expressions.
    pub helpers: IndexSet<String>,
    errors: Vec<CompilerError>,
    global_id: usize,
}

impl TransformContext {
    pub fn new(options: CompilerOptions, directive_transforms: Rc<DirectiveTransforms>) -> Self {
        TransformContext {
            options,
            directive_transforms,
            node: NodeState::default(),
            block: BlockIRNode::new(),
            helpers: IndexSet::new(),
            errors: Vec::new(),
            global_id: 0,
        }
    }

    pub fn directive_transforms(&self) -> Rc<DirectiveTransforms> {
        Rc::clone(&self.directive_transforms)
    }

    /// Element reference of the current node, allocated on first use.
    pub fn reference(&mut self) -> ElementRef {
        if let Some(id) = self.node.dynamic.id {
            return id;
        }
        let id = ElementRef::new(self.global_id);
        self.global_id += 1;
        self.node.dynamic.flags |= DynamicFlag::REFERENCED;
        self.node.dynamic.id = Some(id);
        id
    }

    /// Attach `operations` to the block, re-running them whenever a
    /// non-constant expression in `expressions` changes.
    ///
    /// When every expression is constant the operations run once and are stored
    /// as plain block operations.
    pub fn register_effect(&mut self, expressions: Vec<IRExpression>, operations: Vec<OperationNode>) {
        if operations.is_empty() {
            return;
        }
        let expressions: Vec<IRExpression> =
            expressions.into_iter().filter(|exp| !exp.is_constant()).collect();
        debug_assert!(
            operations
                .iter()
                .flat_map(OperationNode::expressions)
                .filter(|exp| !exp.is_constant())
                .all(|exp| expressions.iter().any(|dep| dep.content() == exp.content())),
            "effect operation reads an expression missing from its dependencies"
        );
        tracing::trace!(
            element = ?operations.first().map(OperationNode::element),
            operations = ?operations.iter().map(OperationNode::kind).collect::<Vec<_>>(),
            dependencies = expressions.len(),
            "register effect"
        );
        if expressions.is_empty() {
            self.register_operation(operations);
            return;
        }
        self.block.effect.push(IREffect {
            expressions,
            operations,
        });
    }

    pub fn register_operation(&mut self, operations: impl IntoIterator<Item = OperationNode>) {
        self.block.operation.extend(operations);
    }

    /// Record a diagnostic. Compilation continues.
    pub fn on_error(&mut self, error: CompilerError) {
        tracing::debug!(code = ?error.code, "{}", error.contextual_message());
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[CompilerError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<CompilerError> {
        std::mem::take(&mut self.errors)
    }

    /// Record a core runtime helper and return its local name.
    pub fn helper(&mut self, name: &str) -> String {
        self.helpers.insert(name.to_string());
        format!("_{}", name)
    }

    /// Start a fresh node, returning the parent's state.
    pub fn enter_node(&mut self) -> NodeState {
        std::mem::take(&mut self.node)
    }

    /// Finish the current node: restore `parent`, append the node's template and
    /// dynamic info to it, and return the finished node state.
    pub fn exit_node(&mut self, parent: NodeState) -> NodeState {
        let child = std::mem::replace(&mut self.node, parent);
        self.node.children_template.push(child.template.clone());
        self.node.dynamic.children.push(child.dynamic.clone());
        child
    }
}

/// Run a single element through a fresh context.
///
/// The element's template becomes template factory `t0` of the returned root.
pub fn compile_element(
    node: &ElementNode,
    options: CompilerOptions,
    directive_transforms: Rc<DirectiveTransforms>,
) -> (RootIRNode, Vec<CompilerError>) {
    let mut context = TransformContext::new(options, directive_transforms);
    let parent = context.enter_node();
    transform_element(node, &mut context);
    let element = context.exit_node(parent);

    let mut root = RootIRNode::default();
    if !element.template.is_empty() {
        root.template.push(element.template);
    }
    let errors = context.take_errors();
    let mut block = std::mem::take(&mut context.block);
    block.dynamic = std::mem::take(&mut context.node.dynamic);
    root.block = block;
    root.helpers = std::mem::take(&mut context.helpers);
    (root, errors)
}
