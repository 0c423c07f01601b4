//! Trailing newline count for lines and block closers.

use serde::Deserialize;

/// How many `\n` characters follow a line or a block's closing line.
///
/// `Newlines::NONE` leaves the cursor on the same physical line, `Newlines::TWO`
/// leaves one blank line, which is how top-level declarations are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Newlines(pub usize);

impl Newlines {
    pub const NONE: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);

    /// The newline characters themselves.
    pub fn as_string(self) -> String {
        "\n".repeat(self.0)
    }
}

impl Default for Newlines {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<usize> for Newlines {
    fn from(count: usize) -> Self {
        Self(count)
    }
}
