//! Go declaration builders used by [`GoEmitter`](crate::GoEmitter).

mod func;
mod tags;

pub use func::Func;
pub use tags::FieldTags;
