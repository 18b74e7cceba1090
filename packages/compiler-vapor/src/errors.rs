//! Compiler Errors
//!
//! Diagnostics reported while lowering element props. None of them are fatal:
//! they are recorded on the transform context and the offending prop is dropped.

use crate::parse_util::SourceLocation;
use serde::Serialize;
use thiserror::Error;

/// Stable diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    /// `v-bind` without an argument and without a value.
    VBindNoExpression,
    /// Same-name shorthand (`:foo`) used with a dynamic argument.
    VBindInvalidSameNameArgument,
    /// `v-on` without a value and without modifiers.
    VOnNoExpression,
}

impl ErrorCode {
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::VBindNoExpression => 34,
            ErrorCode::VOnNoExpression => 35,
            ErrorCode::VBindInvalidSameNameArgument => 52,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::VBindNoExpression => "v-bind is missing expression.",
            ErrorCode::VBindInvalidSameNameArgument => {
                "v-bind with same-name shorthand only allows static argument."
            }
            ErrorCode::VOnNoExpression => "v-on is missing expression.",
        }
    }
}

/// A located diagnostic.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct CompilerError {
    pub code: ErrorCode,
    pub loc: Option<SourceLocation>,
    pub message: String,
}

impl CompilerError {
    pub fn new(code: ErrorCode, loc: Option<SourceLocation>) -> Self {
        CompilerError {
            code,
            loc,
            message: code.default_message().to_string(),
        }
    }

    /// Message followed by the `line:column` of the diagnostic, when known.
    pub fn contextual_message(&self) -> String {
        match &self.loc {
            Some(loc) if !loc.is_stub() => format!("{} ({})", self.message, loc),
            _ => self.message.clone(),
        }
    }
}

/// Shorthand for [`CompilerError::new`].
pub fn create_compiler_error(code: ErrorCode, loc: Option<SourceLocation>) -> CompilerError {
    CompilerError::new(code, loc)
}

/// Errors returned by the fallible parts of the public API.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid compiler options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
