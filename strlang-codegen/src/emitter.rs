//! Composition contract shared by the language emitters.

use tracing::{debug, trace};

use crate::builder::{CodeBuilder, Newlines};

/// A target-language wrapper around an owned [`CodeBuilder`].
///
/// Emitters write their body straight into the builder as methods are called.
/// The prologue (package line, imports, opening tag) depends on metadata that
/// is only complete once the body is done, so it is built separately and
/// prepended by [`render`](Emitter::render).
pub trait Emitter: Sized {
    /// The builder holding the body written so far.
    fn builder(&self) -> &CodeBuilder;

    /// Mutable access to the body builder.
    fn builder_mut(&mut self) -> &mut CodeBuilder;

    /// Build a fresh builder holding only the language prologue.
    fn prologue(&self) -> CodeBuilder;

    /// Prologue followed by the body, verbatim.
    fn render(&self) -> String {
        let mut out = self.prologue();
        let body = self.builder().as_str();
        debug!(prologue = out.as_str().len(), body = body.len(), "render");
        out.write_raw(body);
        out.build()
    }

    /// Write `header`, run `body` on the emitter one level deeper, then write
    /// `close` followed by `newlines` newlines.
    fn scope<F>(&mut self, header: &str, close: &str, newlines: Newlines, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        trace!(depth = self.builder().depth(), header, "open scope");
        self.builder_mut().write_line(header).indent();
        body(self);
        self.builder_mut().unindent().write_line_n(close, newlines);
        self
    }

    /// Like [`scope`](Emitter::scope), but `header` continues the current line
    /// and is written without an indentation prefix.
    fn scope_inline<F>(
        &mut self,
        header: &str,
        close: &str,
        newlines: Newlines,
        body: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        trace!(depth = self.builder().depth(), header, "open inline scope");
        self.builder_mut().write_raw(header).write_raw("\n").indent();
        body(self);
        self.builder_mut().unindent().write_line_n(close, newlines);
        self
    }

    /// Strip trailing newlines, then open a scope on the same physical line.
    ///
    /// `header` is expected to start with a space, e.g. `" else {"`.
    /// The buffer must end with the closing line of the block being continued.
    fn chain<F>(&mut self, header: &str, close: &str, newlines: Newlines, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.builder_mut().trim_right("\n");
        self.scope_inline(header, close, newlines, body)
    }
}
