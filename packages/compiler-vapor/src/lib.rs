#![deny(clippy::all)]

/**
 * Vue Vapor Compiler - element props
 *
 * Lowers template element props into IR operations and renders them as
 * vapor runtime calls.
 */

// Core modules
pub mod ast;
pub mod config;
pub mod errors;
pub mod parse_util;
pub mod shared;

// Compilation modules
pub mod generators;
pub mod ir;
pub mod transforms;

// Re-exports
pub use ast::ElementNode;
pub use config::CompilerOptions;
pub use errors::{CompilerError, ErrorCode, Error, Result};
pub use generators::{generate, CodegenResult};
pub use ir::RootIRNode;
pub use transforms::{compile_element, DirectiveTransforms, TransformContext};

use std::rc::Rc;

/// Output of [`compile`]: the IR, the rendered code, and every diagnostic raised.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub ir: RootIRNode,
    pub codegen: CodegenResult,
    pub errors: Vec<CompilerError>,
}

/// Transform `node` with the built-in directive handlers and render the result.
pub fn compile(node: &ElementNode, options: &CompilerOptions) -> CompileOutput {
    let transforms = Rc::new(DirectiveTransforms::builtin());
    let (ir, errors) = compile_element(node, options.clone(), transforms);
    let codegen = generate(&ir, options);
    CompileOutput { ir, codegen, errors }
}
