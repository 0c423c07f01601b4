//! Indentation-aware text building for code generators.
//!
//! This crate provides the language-agnostic engine used by the
//! language emitters (e.g., `strlang-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - The text engine (CodeBuilder, Indent, Newlines)
//! - [`emitter`] - The [`Emitter`] trait every language emitter implements
//! - [`generation`] - Metadata gathered while emitting (ImportSet)
//! - [`config`] - Formatting [`Style`], loadable from TOML
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod config;
pub mod emitter;
mod error;
pub mod generation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, Indent, Newlines};
pub use config::Style;
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use generation::ImportSet;
