//! Parse Utilities
//!
//! Source positions and spans attached to template nodes and IR operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single point in the template source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position { offset, line, column }
    }

    /// Compute the position of `offset` inside `content`.
    ///
    /// Lines and columns are 1-based. Offsets past the end clamp to the end.
    pub fn from_offset(content: &str, offset: usize) -> Self {
        let mut offset = offset.min(content.len());
        while !content.is_char_boundary(offset) {
            offset -= 1;
        }
        let mut line = 1;
        let mut column = 1;
        for ch in content[..offset].chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Position::new(offset, line, column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(0, 1, 1)
    }
}

/// A span of template source, together with the text it covers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
    pub source: String,
}

impl SourceLocation {
    /// Location of `source[start..end]` within `content`.
    pub fn new(content: &str, start: usize, end: usize) -> Self {
        let start_pos = Position::from_offset(content, start);
        let end_pos = Position::from_offset(content, end.max(start));
        SourceLocation {
            source: content[start_pos.offset..end_pos.offset].to_string(),
            start: start_pos,
            end: end_pos,
        }
    }

    /// Location used for synthesized nodes that have no real source text.
    pub fn stub() -> Self {
        SourceLocation::default()
    }

    pub fn is_stub(&self) -> bool {
        self.source.is_empty() && self.start == Position::default() && self.end == Position::default()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start.line, self.start.column)
    }
}
