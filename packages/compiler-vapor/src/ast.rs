//! Template AST
//!
//! The slice of the parsed template this stage reads: elements and their
//! attribute/directive lists. Nodes are produced by the parser and treated as
//! read-only here.

use crate::parse_util::SourceLocation;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An expression as written in the template, plus what is known about it statically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimpleExpressionNode {
    pub content: String,
    /// The content is a compile-time constant (e.g. the `id` in `:id="x"`).
    pub is_static: bool,
    /// The expression is a key that names an event handler.
    pub is_handler_key: bool,
    pub loc: SourceLocation,
}

impl SimpleExpressionNode {
    pub fn new(content: impl Into<String>, is_static: bool) -> Self {
        SimpleExpressionNode {
            content: content.into(),
            is_static,
            is_handler_key: false,
            loc: SourceLocation::stub(),
        }
    }

    pub fn with_loc(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }

    pub fn handler_key(mut self) -> Self {
        self.is_handler_key = true;
        self
    }
}

/// Shorthand for a [`SimpleExpressionNode`] without a location.
pub fn create_simple_expression(content: impl Into<String>, is_static: bool) -> SimpleExpressionNode {
    SimpleExpressionNode::new(content, is_static)
}

/// Text attribute: `id="app"` or a bare `disabled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeNode {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub loc: SourceLocation,
}

/// Directive: `v-name:arg.mod1.mod2="exp"`, with the `v-` prefix (or `:`/`@`
/// shorthand) already stripped from `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveNode {
    pub name: String,
    #[serde(default)]
    pub arg: Option<SimpleExpressionNode>,
    #[serde(default)]
    pub exp: Option<SimpleExpressionNode>,
    #[serde(default)]
    pub modifiers: SmallVec<[String; 2]>,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl DirectiveNode {
    pub fn new(
        name: impl Into<String>,
        arg: Option<SimpleExpressionNode>,
        exp: Option<SimpleExpressionNode>,
    ) -> Self {
        DirectiveNode {
            name: name.into(),
            arg,
            exp,
            modifiers: SmallVec::new(),
            loc: SourceLocation::stub(),
        }
    }

    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_loc(mut self, loc: SourceLocation) -> Self {
        self.loc = loc;
        self
    }

    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}

/// One entry of an element's prop list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropNode {
    Attribute(AttributeNode),
    Directive(DirectiveNode),
}

impl PropNode {
    /// Plain text attribute.
    pub fn attr(name: impl Into<String>, value: Option<&str>) -> Self {
        PropNode::Attribute(AttributeNode {
            name: name.into(),
            value: value.map(str::to_string),
            loc: SourceLocation::stub(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            PropNode::Attribute(attr) => &attr.name,
            PropNode::Directive(dir) => &dir.name,
        }
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            PropNode::Attribute(attr) => &attr.loc,
            PropNode::Directive(dir) => &dir.loc,
        }
    }
}

impl From<DirectiveNode> for PropNode {
    fn from(dir: DirectiveNode) -> Self {
        PropNode::Directive(dir)
    }
}

impl From<AttributeNode> for PropNode {
    fn from(attr: AttributeNode) -> Self {
        PropNode::Attribute(attr)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    #[default]
    Element,
    Component,
    Slot,
    Template,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    pub tag: String,
    #[serde(default)]
    pub tag_type: ElementType,
    #[serde(default)]
    pub props: Vec<PropNode>,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>, props: Vec<PropNode>) -> Self {
        ElementNode {
            tag: tag.into(),
            tag_type: ElementType::Element,
            props,
            loc: SourceLocation::stub(),
        }
    }
}
