/**
 * Vue Vapor Compiler CLI
 *
 * Reads an element (and optional compiler options) as JSON and prints either
 * its IR or the rendered module.
 */
use anyhow::{Context, Result};
use compiler_vapor::ast::ElementNode;
use compiler_vapor::{compile, CompileOutput, CompilerOptions};
use std::fs;
use std::path::Path;

/// What `vaporc` prints on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Ir,
    Code,
}

impl Emit {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ir" => Some(Emit::Ir),
            "code" => Some(Emit::Code),
            _ => None,
        }
    }
}

pub fn read_element(path: &Path) -> Result<ElementNode> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read element file {}", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("invalid element JSON in {}", path.display()))
}

pub fn read_options(path: Option<&Path>) -> Result<CompilerOptions> {
    let Some(path) = path else {
        return Ok(CompilerOptions::default());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    CompilerOptions::from_json(&source)
        .with_context(|| format!("invalid compiler options in {}", path.display()))
}

/// Text printed for `output` in the requested `emit` mode.
pub fn render_output(output: &CompileOutput, emit: Emit) -> Result<String> {
    match emit {
        Emit::Ir => Ok(serde_json::to_string_pretty(&output.ir)?),
        Emit::Code if output.codegen.preamble.is_empty() => Ok(output.codegen.code.clone()),
        Emit::Code => Ok(format!("{}\n\n{}", output.codegen.preamble, output.codegen.code)),
    }
}

/// Compile the element at `input`. Diagnostics are returned with the output;
/// only I/O and JSON problems are errors.
pub fn compile_file(input: &Path, options: Option<&Path>) -> Result<CompileOutput> {
    let element = read_element(input)?;
    let options = read_options(options)?;
    tracing::info!(tag = %element.tag, props = element.props.len(), "compiling element");
    Ok(compile(&element, &options))
}
