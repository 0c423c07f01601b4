//! Formatting style shared by the engine and every emitter.
//!
//! A style can be built in code or read from TOML:
//!
//! ```toml
//! indent = "tab"              # or { spaces = 4 }, or { custom = "--" }
//! declaration_newlines = 2    # newlines after a top-level declaration
//! ```

use std::str::FromStr;

use serde::Deserialize;

use crate::{
    Error, Result,
    builder::{Indent, Newlines},
};

/// Formatting options for generated text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    /// Unit written once per depth level.
    pub indent: Indent,
    /// Newlines after the closing line of a function, type or class.
    pub declaration_newlines: Newlines,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            declaration_newlines: Newlines::TWO,
        }
    }
}

impl Style {
    /// Replace the indentation unit.
    pub fn with_indent(mut self, indent: impl Into<Indent>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Replace the newline count after declarations.
    pub fn with_declaration_newlines(mut self, newlines: impl Into<Newlines>) -> Self {
        self.declaration_newlines = newlines.into();
        self
    }

    /// Parse a style from TOML with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let style: Style = toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        style.validate(content, filename)?;
        Ok(style)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.indent.as_str().contains(['\n', '\r']) {
            return Err(Error::validation(
                "indent unit must not contain line breaks",
                src,
                filename,
                Some("indent"),
            ));
        }
        Ok(())
    }
}

impl FromStr for Style {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Style::from_str_with_filename(s, "strlang.toml")
    }
}
