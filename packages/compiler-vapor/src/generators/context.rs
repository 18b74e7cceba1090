//! Codegen Context
//!
//! Line-based output buffer with an indentation counter. Parts are appended to
//! the current line; `newline` starts a fresh line at the current depth. A line
//! that is still empty when the depth changes is re-indented, so a closing
//! brace written after `with_indent` lands at the outer depth.

use crate::config::CompilerOptions;
use indexmap::IndexSet;

const INDENT_WITH: &str = "  ";

#[derive(Debug, Clone)]
struct EmittedLine {
    parts: Vec<String>,
    indent: usize,
}

impl EmittedLine {
    fn new(indent: usize) -> Self {
        EmittedLine {
            parts: Vec::new(),
            indent,
        }
    }
}

/// A piece of output: literal text, or a callback that writes into the context.
pub enum CodeFragment<'g> {
    Text(String),
    Gen(Box<dyn FnOnce(&mut CodegenContext) + 'g>),
}

impl From<String> for CodeFragment<'_> {
    fn from(text: String) -> Self {
        CodeFragment::Text(text)
    }
}

impl From<&str> for CodeFragment<'_> {
    fn from(text: &str) -> Self {
        CodeFragment::Text(text.to_string())
    }
}

/// Wrap a writer callback as a [`CodeFragment`].
pub fn gen<'g>(f: impl FnOnce(&mut CodegenContext) + 'g) -> CodeFragment<'g> {
    CodeFragment::Gen(Box::new(f))
}

pub struct CodegenContext {
    pub options: CompilerOptions,
    lines: Vec<EmittedLine>,
    indent: usize,
    helpers: IndexSet<String>,
    vapor_helpers: IndexSet<String>,
}

impl CodegenContext {
    pub fn new(options: CompilerOptions) -> Self {
        CodegenContext {
            options,
            lines: vec![EmittedLine::new(0)],
            indent: 0,
            helpers: IndexSet::new(),
            vapor_helpers: IndexSet::new(),
        }
    }

    fn current_line_mut(&mut self) -> &mut EmittedLine {
        if self.lines.is_empty() {
            self.lines.push(EmittedLine::new(self.indent));
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    pub fn line_is_empty(&self) -> bool {
        match self.lines.last() {
            Some(line) => line.parts.is_empty(),
            None => true,
        }
    }

    pub fn push(&mut self, part: &str) {
        if !part.is_empty() {
            self.current_line_mut().parts.push(part.to_string());
        }
    }

    /// Start a new line, unless the current one is still empty.
    pub fn newline(&mut self) {
        if !self.line_is_empty() {
            self.lines.push(EmittedLine::new(self.indent));
        }
    }

    fn inc_indent(&mut self) {
        self.indent += 1;
        if self.line_is_empty() {
            let indent = self.indent;
            self.current_line_mut().indent = indent;
        }
    }

    fn dec_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        if self.line_is_empty() {
            let indent = self.indent;
            self.current_line_mut().indent = indent;
        }
    }

    pub fn with_indent(&mut self, f: impl FnOnce(&mut Self)) {
        self.inc_indent();
        f(self);
        self.dec_indent();
    }

    pub fn push_fragment(&mut self, fragment: CodeFragment<'_>) {
        match fragment {
            CodeFragment::Text(text) => self.push(&text),
            CodeFragment::Gen(f) => f(self),
        }
    }

    /// `open`, the fragments separated by `separator`, then `close`.
    pub fn push_multi(
        &mut self,
        (open, close, separator): (&str, &str, &str),
        fragments: Vec<CodeFragment<'_>>,
    ) {
        self.push(open);
        let len = fragments.len();
        for (i, fragment) in fragments.into_iter().enumerate() {
            self.push_fragment(fragment);
            if i + 1 < len {
                self.push(separator);
            }
        }
        self.push(close);
    }

    /// `name(arg0, arg1, ...)`. Arguments left out of `args` are not passed at all.
    pub fn push_fn_call(&mut self, name: &str, args: Vec<CodeFragment<'_>>) {
        self.push(name);
        self.push_multi(("(", ")", ", "), args);
    }

    /// Record a core runtime helper and return its local name.
    pub fn helper(&mut self, name: &str) -> String {
        self.helpers.insert(name.to_string());
        format!("_{}", name)
    }

    /// Record a vapor runtime helper and return its local name.
    pub fn vapor_helper(&mut self, name: &str) -> String {
        self.vapor_helpers.insert(name.to_string());
        format!("_{}", name)
    }

    pub fn helpers(&self) -> &IndexSet<String> {
        &self.helpers
    }

    pub fn vapor_helpers(&self) -> &IndexSet<String> {
        &self.vapor_helpers
    }

    pub fn to_source(&self) -> String {
        let mut lines: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                if line.parts.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", INDENT_WITH.repeat(line.indent), line.parts.concat())
                }
            })
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}
