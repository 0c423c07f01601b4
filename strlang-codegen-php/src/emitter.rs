//! PHP source emitter.

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use strlang_codegen::{CodeBuilder, Emitter, Newlines, Style};

use crate::ast::Method;

/// Emits a single PHP file.
///
/// # Example
///
/// ```
/// use strlang_codegen_php::{Method, PhpEmitter};
///
/// let mut php = PhpEmitter::new("App\\Models");
/// php.class("User", |php| {
///     php.method(&Method::new("getEmail").modifier("public").returns("string"), |php| {
///         php.write_line("return $this->email;");
///     });
/// });
///
/// assert!(php.to_string().starts_with("<?php\n\nnamespace App\\Models;\n\nclass User {\n"));
/// ```
#[derive(Debug, Clone)]
pub struct PhpEmitter {
    namespace: String,
    style: Style,
    builder: CodeBuilder,
}

impl PhpEmitter {
    /// Create an emitter for `namespace` with the default style.
    ///
    /// An empty namespace omits the `namespace` declaration.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_style(namespace, Style::default())
    }

    /// Create an emitter for `namespace` with a custom style.
    pub fn with_style(namespace: impl Into<String>, style: Style) -> Self {
        Self {
            namespace: namespace.into(),
            builder: CodeBuilder::from_style(&style),
            style,
        }
    }

    /// Namespace declared after the opening tag. Empty means none.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `if (cond) {` ... `}`
    pub fn if_stmt<F>(&mut self, cond: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.if_stmt_n(cond, Newlines::ONE, body)
    }

    /// Like [`if_stmt`](Self::if_stmt), with `newlines` newlines after the `}`.
    pub fn if_stmt_n<F>(&mut self, cond: &str, newlines: Newlines, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.scope(&format!("if ({}) {{", cond), "}", newlines, body)
    }

    /// ` else {` ... `}` continuing the preceding `}`.
    pub fn else_branch<F>(&mut self, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.chain(" else {", "}", Newlines::ONE, body)
    }

    /// ` elseif (cond) {` ... `}` continuing the preceding `}`.
    pub fn else_if<F>(&mut self, cond: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.chain(&format!(" elseif ({}) {{", cond), "}", Newlines::ONE, body)
    }

    /// `class name {` ... `}`
    pub fn class<F>(&mut self, name: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let newlines = self.style.declaration_newlines;
        self.scope(&format!("class {} {{", name), "}", newlines, body)
    }

    /// A method (or function) declaration.
    pub fn method<F>(&mut self, method: &Method, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let newlines = self.style.declaration_newlines;
        self.scope(&method.header(), "}", newlines, body)
    }
}

impl Emitter for PhpEmitter {
    fn builder(&self) -> &CodeBuilder {
        &self.builder
    }

    fn builder_mut(&mut self) -> &mut CodeBuilder {
        &mut self.builder
    }

    fn prologue(&self) -> CodeBuilder {
        let mut out = CodeBuilder::new(self.builder.indent_unit().clone());
        out.write_line_n("<?php", Newlines::TWO);

        if !self.namespace.is_empty() {
            out.write_line_n(&format!("namespace {};", self.namespace), Newlines::TWO);
        }

        out
    }
}

impl Deref for PhpEmitter {
    type Target = CodeBuilder;

    fn deref(&self) -> &CodeBuilder {
        &self.builder
    }
}

impl DerefMut for PhpEmitter {
    fn deref_mut(&mut self) -> &mut CodeBuilder {
        &mut self.builder
    }
}

impl fmt::Display for PhpEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
