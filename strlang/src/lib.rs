//! Build source text for several languages from nested, indentation-aware blocks.
//!
//! This crate re-exports the text engine and the language emitters so a code
//! generator only needs one dependency.
//!
//! # Usage
//!
//! ```
//! use strlang::{Emitter, GoEmitter};
//!
//! let mut go = GoEmitter::new("main");
//! go.if_stmt("err != nil", |go| {
//!     go.write_line("return err");
//! })
//! .else_branch(|go| {
//!     go.write_line("return nil");
//! });
//!
//! assert_eq!(
//!     go.render(),
//!     "package main\n\nif err != nil {\n  return err\n} else {\n  return nil\n}\n",
//! );
//! ```
//!
//! # Crates
//!
//! - [`strlang_codegen`] - The engine: [`CodeBuilder`], [`Indent`], [`Style`]
//! - [`strlang_codegen_go`] - [`GoEmitter`]
//! - [`strlang_codegen_php`] - [`PhpEmitter`]
//! - [`strlang_codegen_js`] - [`JsEmitter`]

pub use strlang_codegen::{
    CodeBuilder, Emitter, Error, ImportSet, Indent, Newlines, Result, Style, builder, config,
    generation,
};
pub use strlang_codegen_go::{FieldTags, Func, GoEmitter};
pub use strlang_codegen_js::JsEmitter;
pub use strlang_codegen_php::{Method, PhpEmitter};

pub use strlang_codegen;
pub use strlang_codegen_go;
pub use strlang_codegen_js;
pub use strlang_codegen_php;
