//! JavaScript source emitter for strlang.
//!
//! JavaScript modules have no mandatory header, so [`JsEmitter`] renders its
//! body as-is.

mod emitter;

pub use emitter::JsEmitter;
pub use strlang_codegen::Emitter;
