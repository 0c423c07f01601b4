//! Metadata collected while emitting and consumed when rendering.

mod imports;

pub use imports::ImportSet;
