//! Generators
//!
//! Renders a [`RootIRNode`] into the body of a vapor render function. Helper
//! names are collected while rendering and turned into import statements.

pub mod block;
pub mod context;
pub mod directive;
pub mod expression;
pub mod object_expression;
pub mod prop;

pub use block::{gen_block, gen_block_content, gen_effects, gen_if, gen_operation};
pub use context::{gen, CodeFragment, CodegenContext};
pub use directive::gen_with_directive;
pub use expression::gen_expression;
pub use object_expression::{gen_object_expression, gen_property_key, ObjectProperty, PropertyKey};
pub use prop::{
    gen_merge_batch_props, gen_set_batch_props, gen_set_prop, render_merge_items,
    render_properties,
};

use crate::config::CompilerOptions;
use crate::generators::expression::to_string_literal;
use crate::ir::RootIRNode;
use indexmap::IndexSet;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenResult {
    /// Template factories followed by the block body.
    pub code: String,
    /// Import statements for every helper `code` uses.
    pub preamble: String,
    /// Core helpers, imported from `core_module_name`.
    pub helpers: Vec<String>,
    /// Vapor helpers, imported from `runtime_module_name`.
    pub vapor_helpers: Vec<String>,
}

fn gen_import(helpers: &IndexSet<String>, module: &str) -> Option<String> {
    if helpers.is_empty() {
        return None;
    }
    let specifiers: Vec<String> = helpers
        .iter()
        .map(|name| format!("{} as _{}", name, name))
        .collect();
    Some(format!(
        "import {{ {} }} from {};",
        specifiers.join(", "),
        to_string_literal(module)
    ))
}

/// `const nX = tI()` for every referenced element created from template `tI`.
/// The i-th child of the root block is the root element of the i-th template.
fn gen_template_roots(root: &RootIRNode, ctx: &mut CodegenContext) {
    for (i, child) in root.block.dynamic.children.iter().enumerate() {
        if i >= root.template.len() {
            break;
        }
        if let Some(id) = child.id {
            ctx.newline();
            ctx.push(&format!("const {} = t{}()", id, i));
        }
    }
}

pub fn generate(root: &RootIRNode, options: &CompilerOptions) -> CodegenResult {
    let mut ctx = CodegenContext::new(options.clone());

    for (i, template) in root.template.iter().enumerate() {
        let factory = ctx.vapor_helper("template");
        ctx.newline();
        ctx.push(&format!("const t{} = {}({})", i, factory, to_string_literal(template)));
    }
    gen_template_roots(root, &mut ctx);
    gen_block_content(&root.block, &mut ctx);

    let mut helpers = root.helpers.clone();
    helpers.extend(ctx.helpers().iter().cloned());
    let vapor_helpers = ctx.vapor_helpers().clone();

    let preamble: Vec<String> = [
        gen_import(&vapor_helpers, &options.runtime_module_name),
        gen_import(&helpers, &options.core_module_name),
    ]
    .into_iter()
    .flatten()
    .collect();

    tracing::debug!(
        templates = root.template.len(),
        helpers = helpers.len() + vapor_helpers.len(),
        "generated render code"
    );

    CodegenResult {
        code: ctx.to_source(),
        preamble: preamble.join("\n"),
        helpers: helpers.into_iter().collect(),
        vapor_helpers: vapor_helpers.into_iter().collect(),
    }
}
