//! Go source emitter for strlang.
//!
//! [`GoEmitter`] writes conditionals, functions, methods and structs into an
//! indentation-aware buffer and prepends the `package` clause and a
//! deduplicated `import (...)` group when rendered.
//!
//! ```
//! use strlang_codegen_go::{FieldTags, GoEmitter};
//!
//! let mut go = GoEmitter::new("models");
//! go.struct_type("User", |go| {
//!     go.field_tagged("ID", "int64", &FieldTags::new().tag("db", "id"));
//! });
//!
//! assert!(go.to_string().contains("ID int64 `db:\"id\"`"));
//! ```

pub mod ast;
mod emitter;

pub use ast::{FieldTags, Func};
pub use emitter::GoEmitter;
pub use strlang_codegen::Emitter;
