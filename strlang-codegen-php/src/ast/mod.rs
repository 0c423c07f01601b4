//! PHP declaration builders used by [`PhpEmitter`](crate::PhpEmitter).

mod method;

pub use method::Method;
