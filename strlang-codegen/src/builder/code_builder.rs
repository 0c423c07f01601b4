//! Indentation-aware text buffer.

use std::fmt;

use tracing::{debug, trace, warn};

use super::{Indent, Newlines};
use crate::config::Style;

/// Text buffer that prefixes every write with the current indentation.
///
/// Every mutating method returns `&mut Self` so calls chain. Nothing is
/// validated: unbalanced blocks or a stray `unindent` produce text exactly as
/// requested, and the caller is responsible for the result being valid code.
///
/// # Example
///
/// ```
/// use strlang_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::Spaces(4));
/// builder.block("fn main() {", "}", |b| {
///     b.write_line("println!(\"Hello, world!\");");
/// });
///
/// assert_eq!(builder.build(), "fn main() {\n    println!(\"Hello, world!\");\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: isize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder using the indentation of a [`Style`].
    pub fn from_style(style: &Style) -> Self {
        Self::new(style.indent.clone())
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Write `text` after the indentation prefix, without a newline.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(text);
        self
    }

    /// Write `text` after the indentation prefix, followed by one newline.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.write_line_n(text, Newlines::ONE)
    }

    /// Write `text` after the indentation prefix, followed by `newlines` newlines.
    pub fn write_line_n(&mut self, text: &str, newlines: Newlines) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(text);
        self.buffer.push_str(&newlines.as_string());
        self
    }

    /// Write `text` verbatim, as if the depth were zero for this one call.
    ///
    /// Used to continue a physical line that already carries its prefix.
    pub fn write_raw(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    // =========================================================================
    // Indentation
    // =========================================================================

    /// Increase the depth by one level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_by(1)
    }

    /// Increase the depth by `levels`.
    pub fn indent_by(&mut self, levels: usize) -> &mut Self {
        self.depth = self.depth.saturating_add_unsigned(levels);
        self
    }

    /// Decrease the depth by one level.
    pub fn unindent(&mut self) -> &mut Self {
        self.unindent_by(1)
    }

    /// Decrease the depth by `levels`.
    ///
    /// The depth may go below zero; writes at a negative depth get no prefix,
    /// and a matching `indent_by` brings the counter back to where it was.
    pub fn unindent_by(&mut self, levels: usize) -> &mut Self {
        let before = self.depth;
        self.depth = self.depth.saturating_sub_unsigned(levels);
        if before >= 0 && self.depth < 0 {
            warn!(depth = self.depth, "indentation depth is negative");
        }
        self
    }

    /// Replace the indentation unit. Lines already written keep their prefix.
    pub fn set_indent(&mut self, indent: impl Into<Indent>) -> &mut Self {
        self.indent = indent.into();
        self
    }

    /// The current indentation unit.
    pub fn indent_unit(&self) -> &Indent {
        &self.indent
    }

    /// The current depth.
    pub fn depth(&self) -> isize {
        self.depth
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// Write `header`, run `body` one level deeper, then write `close`.
    ///
    /// # Example
    ///
    /// ```
    /// use strlang_codegen::builder::{CodeBuilder, Indent};
    ///
    /// let mut builder = CodeBuilder::new(Indent::Tab);
    /// builder.block("if ok {", "}", |b| {
    ///     b.write_line("return nil");
    /// });
    ///
    /// assert_eq!(builder.as_str(), "if ok {\n\treturn nil\n}\n");
    /// ```
    pub fn block<F>(&mut self, header: &str, close: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.block_n(header, close, Newlines::ONE, body)
    }

    /// Like [`block`](Self::block), with `newlines` newlines after `close`.
    pub fn block_n<F>(&mut self, header: &str, close: &str, newlines: Newlines, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        trace!(depth = self.depth, header, "open block");
        self.write_line(header);
        self.indent();
        body(self);
        self.unindent();
        self.write_line_n(close, newlines);
        trace!(depth = self.depth, close, "close block");
        self
    }

    // =========================================================================
    // Trimming
    // =========================================================================

    /// Remove the longest prefix of the buffer made only of chars in `cutset`.
    pub fn trim_left(&mut self, cutset: &str) -> &mut Self {
        let kept = self
            .buffer
            .trim_start_matches(|c: char| cutset.contains(c))
            .len();
        let removed = self.buffer.len() - kept;
        self.buffer.drain(..removed);
        debug!(removed, "trimmed buffer start");
        self
    }

    /// Remove the longest suffix of the buffer made only of chars in `cutset`.
    pub fn trim_right(&mut self, cutset: &str) -> &mut Self {
        let kept = self
            .buffer
            .trim_end_matches(|c: char| cutset.contains(c))
            .len();
        let removed = self.buffer.len() - kept;
        self.buffer.truncate(kept);
        debug!(removed, "trimmed buffer end");
        self
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Check whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let prefix = self.indent.prefix(self.depth);
        self.buffer.push_str(&prefix);
    }
}

impl fmt::Display for CodeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
