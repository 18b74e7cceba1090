//! IR Handles

use serde::Serialize;
use std::fmt;

/// Identifies a node of the rendered tree. Allocated once per referenced
/// element by the transform context and never reused; generated code names the
/// node `n<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementRef(pub usize);

impl ElementRef {
    pub fn new(id: usize) -> Self {
        ElementRef(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// Renders the local variable holding the node in generated code.
impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}
