//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Indentation-aware text buffer with nested blocks and trimming
//! - [`Indent`] - The unit written once per depth level
//! - [`Newlines`] - Trailing newline count after lines and block closers

mod code_builder;
mod indent;
mod newlines;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use newlines::Newlines;
