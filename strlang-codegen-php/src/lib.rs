//! PHP source emitter for strlang.
//!
//! [`PhpEmitter`] writes conditionals, classes and methods and prepends the
//! `<?php` opening tag and the `namespace` declaration when rendered.

pub mod ast;
mod emitter;

pub use ast::Method;
pub use emitter::PhpEmitter;
pub use strlang_codegen::Emitter;
