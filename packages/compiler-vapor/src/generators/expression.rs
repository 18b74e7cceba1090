//! Expressions

use crate::generators::CodegenContext;
use crate::ir::IRExpression;

/// JS string literal for `value`.
pub fn to_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

/// Literal code and dynamic expressions are written as-is; static expressions
/// become string literals.
pub fn gen_expression(exp: &IRExpression, ctx: &mut CodegenContext) {
    match exp {
        IRExpression::Literal(code) => ctx.push(code),
        IRExpression::Simple(exp) if exp.is_static => ctx.push(&to_string_literal(&exp.content)),
        IRExpression::Simple(exp) => ctx.push(&exp.content),
    }
}
