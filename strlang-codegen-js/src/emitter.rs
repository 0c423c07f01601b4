//! JavaScript source emitter.

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use strlang_codegen::{CodeBuilder, Emitter, Newlines, Style};

/// Emits a single JavaScript module.
///
/// # Example
///
/// ```
/// use strlang_codegen_js::JsEmitter;
///
/// let mut js = JsEmitter::new();
/// js.export().object("const", "config", |js| {
///     js.write_line("debug: false,");
/// });
///
/// assert_eq!(js.to_string(), "export const config = {\n  debug: false,\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsEmitter {
    builder: CodeBuilder,
}

impl JsEmitter {
    /// Create an emitter with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an emitter with a custom style.
    pub fn with_style(style: Style) -> Self {
        Self {
            builder: CodeBuilder::from_style(&style),
        }
    }

    /// `if (cond) {` ... `}`
    pub fn if_stmt<F>(&mut self, cond: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.scope(&format!("if ({}) {{", cond), "}", Newlines::ONE, body)
    }

    /// ` else {` ... `}` continuing the preceding `}`.
    pub fn else_branch<F>(&mut self, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.chain(" else {", "}", Newlines::ONE, body)
    }

    /// ` else if (cond) {` ... `}` continuing the preceding `}`.
    pub fn else_if<F>(&mut self, cond: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.chain(&format!(" else if ({}) {{", cond), "}", Newlines::ONE, body)
    }

    /// `kind name = {` ... `}`, e.g. `const config = { ... }`.
    ///
    /// When the current line is still open (after [`export`](Self::export)),
    /// the header continues it instead of starting a new indented line.
    pub fn object<F>(&mut self, kind: &str, name: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let header = format!("{} {} = {{", kind, name);
        if self.line_is_open() {
            self.scope_inline(&header, "}", Newlines::ONE, body)
        } else {
            self.scope(&header, "}", Newlines::ONE, body)
        }
    }

    /// Write `export ` at the current indentation, leaving the line open.
    pub fn export(&mut self) -> &mut Self {
        self.builder.write("export ");
        self
    }

    fn line_is_open(&self) -> bool {
        let text = self.builder.as_str();
        !text.is_empty() && !text.ends_with('\n')
    }
}

impl Emitter for JsEmitter {
    fn builder(&self) -> &CodeBuilder {
        &self.builder
    }

    fn builder_mut(&mut self) -> &mut CodeBuilder {
        &mut self.builder
    }

    fn prologue(&self) -> CodeBuilder {
        CodeBuilder::new(self.builder.indent_unit().clone())
    }
}

impl Deref for JsEmitter {
    type Target = CodeBuilder;

    fn deref(&self) -> &CodeBuilder {
        &self.builder
    }
}

impl DerefMut for JsEmitter {
    fn deref_mut(&mut self) -> &mut CodeBuilder {
        &mut self.builder
    }
}

impl fmt::Display for JsEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use strlang_codegen::{Indent, testing::assert_content_eq};

    use super::*;

    fn emitter() -> JsEmitter {
        JsEmitter::with_style(Style::default().with_indent(Indent::Spaces(1)))
    }

    #[test]
    fn test_if() {
        let mut js = emitter();
        js.if_stmt("true", |js| {
            js.write_line("return false");
        });

        assert_content_eq("if (true) {\n return false\n}\n", &js.render());
    }

    #[test]
    fn test_else() {
        let mut js = emitter();
        js.if_stmt("true", |js| {
            js.write_line("return false");
        })
        .else_branch(|js| {
            js.write_line("return true");
        });

        assert_content_eq(
            "if (true) {\n return false\n} else {\n return true\n}\n",
            &js.render(),
        );
    }

    #[test]
    fn test_else_if() {
        let mut js = emitter();
        js.if_stmt("true", |js| {
            js.write_line("return false");
        })
        .else_if("false", |js| {
            js.write_line("return true");
        });

        assert_content_eq(
            "if (true) {\n return false\n} else if (false) {\n return true\n}\n",
            &js.render(),
        );
    }

    #[test]
    fn test_export() {
        let mut js = emitter();
        js.export();

        assert_eq!(js.render(), "export ");
    }

    #[test]
    fn test_object() {
        let mut js = emitter();
        js.export().object("const", "Test", |js| {
            js.write_line("isTest: true,");
        });

        assert_content_eq("export const Test = {\n isTest: true,\n}\n", &js.render());
    }

    #[test]
    fn test_export_at_depth_writes_one_prefix() {
        let mut js = JsEmitter::new();
        js.indent();
        js.export().object("const", "a", |_| {});

        assert_content_eq("  export const a = {\n  }\n", &js.render());
    }

    #[test]
    fn test_exported_object_inside_block() {
        let mut js = emitter();
        js.if_stmt("ok", |js| {
            js.export().object("const", "a", |js| {
                js.write_line("b: 1,");
            });
        });

        assert_content_eq(
            "if (ok) {\n export const a = {\n  b: 1,\n }\n}\n",
            &js.render(),
        );
    }

    #[test]
    fn test_nested_objects() {
        let mut js = emitter();
        js.object("let", "a", |js| {
            js.block("b: {", "},", |b| {
                b.write_line("c: 1,");
            });
        });

        assert_content_eq("let a = {\n b: {\n  c: 1,\n },\n}\n", &js.render());
    }

    #[test]
    fn test_render_is_body() {
        let mut js = emitter();
        js.write_line("'use strict';");

        assert_eq!(js.to_string(), js.builder().as_str());
    }
}
