use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for style parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse style configuration")]
    #[diagnostic(code(strlang::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(strlang::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` when it occurs in the source
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        needle: Option<&str>,
    ) -> Box<Self> {
        let span = needle
            .and_then(|n| src.find(n).map(|offset| SourceSpan::from((offset, n.len()))));
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}
