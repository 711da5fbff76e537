//! Mutable accumulator for one render pass.

use crate::options::RenderOptions;

/// Indentation depth plus the output buffer of a single render pass.
///
/// One instance serves exactly one top-to-bottom render; it is never shared.
#[derive(Debug, Clone)]
pub struct RenderState {
    depth: usize,
    indent_unit: String,
    output: String,
}

impl RenderState {
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            depth: 0,
            indent_unit: indent_unit.into(),
            output: String::new(),
        }
    }

    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(options.indent.clone())
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn push_indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease depth; clamps at zero.
    pub fn pop_indent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn indent_string(&self) -> String {
        self.indent_unit.repeat(self.depth)
    }

    pub fn append(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Append `text` preceded by the current indentation.
    pub fn append_indented(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(&self.indent_unit);
        }
        self.output.push_str(text);
    }

    /// Append an indented line terminated by `\n`.
    pub fn append_indented_line(&mut self, text: &str) {
        self.append_indented(text);
        self.output.push('\n');
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::from_options(&RenderOptions::default())
    }
}
