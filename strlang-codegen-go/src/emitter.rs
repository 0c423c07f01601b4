//! Go source emitter.

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use strlang_codegen::{CodeBuilder, Emitter, ImportSet, Newlines, Style};

use crate::ast::{FieldTags, Func};

/// Emits a single Go source file.
///
/// Body constructs are written immediately; the `package` line and the
/// deduplicated `import (...)` group are prepended when rendering.
///
/// # Example
///
/// ```
/// use strlang_codegen_go::{Func, GoEmitter};
///
/// let mut go = GoEmitter::new("main");
/// go.add_imports(["fmt"]);
/// go.func(&Func::new("main"), |go| {
///     go.write_line("fmt.Println(\"hello\")");
/// });
///
/// assert_eq!(
///     go.to_string(),
///     "package main\n\nimport (\n  \"fmt\"\n)\n\nfunc main() {\n  fmt.Println(\"hello\")\n}\n\n",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct GoEmitter {
    package: String,
    imports: ImportSet,
    style: Style,
    builder: CodeBuilder,
}

impl GoEmitter {
    /// Create an emitter for `package` with the default style.
    pub fn new(package: impl Into<String>) -> Self {
        Self::with_style(package, Style::default())
    }

    /// Create an emitter for `package` with a custom style.
    pub fn with_style(package: impl Into<String>, style: Style) -> Self {
        Self {
            package: package.into(),
            imports: ImportSet::new(),
            builder: CodeBuilder::from_style(&style),
            style,
        }
    }

    /// Package name written in the `package` clause.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Imports collected so far, in first-seen order.
    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    // =========================================================================
    // Conditionals
    // =========================================================================

    /// `if cond {` ... `}`
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
        self.scope(&format!("if {} {{", cond), "}", newlines, body)
    }

    /// ` else {` ... `}` continuing the preceding `}`.
    pub fn else_branch<F>(&mut self, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.else_branch_n(Newlines::ONE, body)
    }

    pub fn else_branch_n<F>(&mut self, newlines: Newlines, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.chain(" else {", "}", newlines, body)
    }

    /// ` else if cond {` ... `}` continuing the preceding `}`.
    pub fn else_if<F>(&mut self, cond: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.else_if_n(cond, Newlines::ONE, body)
    }

    pub fn else_if_n<F>(&mut self, cond: &str, newlines: Newlines, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.chain(&format!(" else if {} {{", cond), "}", newlines, body)
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Record imports for the prologue. Nothing is written to the body.
    pub fn add_imports<I, S>(&mut self, imports: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.extend(imports);
        self
    }

    /// A function or method declaration.
    pub fn func<F>(&mut self, func: &Func, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let newlines = self.style.declaration_newlines;
        self.scope(&func.header(), "}", newlines, body)
    }

    /// `type name struct {` ... `}`
    pub fn struct_type<F>(&mut self, name: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let newlines = self.style.declaration_newlines;
        self.scope(&format!("type {} struct {{", name), "}", newlines, body)
    }

    /// A struct field without tags.
    pub fn field(&mut self, name: &str, ty: &str) -> &mut Self {
        self.builder.write_line(&format!("{} {}", name, ty));
        self
    }

    /// A struct field followed by its tag literal. Empty tags are omitted.
    pub fn field_tagged(&mut self, name: &str, ty: &str, tags: &FieldTags) -> &mut Self {
        if tags.is_empty() {
            return self.field(name, ty);
        }
        self.builder
            .write_line(&format!("{} {} {}", name, ty, tags.render()));
        self
    }
}

impl Emitter for GoEmitter {
    fn builder(&self) -> &CodeBuilder {
        &self.builder
    }

    fn builder_mut(&mut self) -> &mut CodeBuilder {
        &mut self.builder
    }

    /// The import group always uses the default two-space unit.
    fn prologue(&self) -> CodeBuilder {
        let mut out = CodeBuilder::default();
        out.write_line_n(&format!("package {}", self.package), Newlines::TWO);

        if !self.imports.is_empty() {
            out.block_n("import (", ")", Newlines::TWO, |b| {
                for name in self.imports.iter() {
                    b.write_line(&format!("\"{}\"", name));
                }
            });
        }

        out
    }
}

impl Deref for GoEmitter {
    type Target = CodeBuilder;

    fn deref(&self) -> &CodeBuilder {
        &self.builder
    }
}

impl DerefMut for GoEmitter {
    fn deref_mut(&mut self) -> &mut CodeBuilder {
        &mut self.builder
    }
}

impl fmt::Display for GoEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
