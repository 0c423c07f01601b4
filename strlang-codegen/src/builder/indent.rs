//! Indentation unit configuration.

use serde::Deserialize;

/// Enough spaces for any `Spaces(u8)` width.
const SPACES: &str = concat!(
    "                                                                ",
    "                                                                ",
    "                                                                ",
    "                                                                ",
);

/// The literal string repeated once per depth level in front of every write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
    /// Any other unit, used verbatim.
    Custom(String),
}

impl Indent {
    /// Tab indentation (Go).
    pub const GO: Self = Self::Tab;

    /// 4-space indentation (PHP, PSR-12).
    pub const PHP: Self = Self::Spaces(4);

    /// 2-space indentation (JavaScript).
    pub const JAVASCRIPT: Self = Self::Spaces(2);

    /// Build an indentation unit from an arbitrary string.
    pub fn custom(unit: impl Into<String>) -> Self {
        Self::Custom(unit.into())
    }

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width)],
            Self::Tab => "\t",
            Self::Custom(unit) => unit,
        }
    }

    /// The unit repeated `depth` times. Negative depths yield an empty prefix.
    pub fn prefix(&self, depth: isize) -> String {
        self.as_str().repeat(depth.max(0).unsigned_abs())
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(2)
    }
}

impl From<&str> for Indent {
    fn from(unit: &str) -> Self {
        if unit == "\t" {
            return Self::Tab;
        }
        match u8::try_from(unit.len()) {
            Ok(width) if width > 0 && unit.bytes().all(|b| b == b' ') => Self::Spaces(width),
            _ => Self::Custom(unit.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(1).as_str(), " ");
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
        assert_eq!(Indent::custom("--").as_str(), "--");
    }

    #[test]
    fn test_widest_spaces() {
        assert_eq!(Indent::Spaces(u8::MAX).as_str().len(), 255);
    }

    #[test]
    fn test_indent_constants() {
        assert_eq!(Indent::GO, Indent::Tab);
        assert_eq!(Indent::PHP, Indent::Spaces(4));
        assert_eq!(Indent::JAVASCRIPT, Indent::Spaces(2));
    }

    #[test]
    fn test_default_is_two_spaces() {
        assert_eq!(Indent::default().as_str(), "  ");
    }

    #[test]
    fn test_prefix_clamps_negative_depth() {
        assert_eq!(Indent::Tab.prefix(3), "\t\t\t");
        assert_eq!(Indent::Tab.prefix(0), "");
        assert_eq!(Indent::Tab.prefix(-2), "");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Indent::from("\t"), Indent::Tab);
        assert_eq!(Indent::from("   "), Indent::Spaces(3));
        assert_eq!(Indent::from("> "), Indent::custom("> "));
        assert_eq!(Indent::from(""), Indent::custom(""));
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            indent: Indent,
        }

        let tab: Wrapper = toml::from_str(r#"indent = "tab""#).unwrap();
        assert_eq!(tab.indent, Indent::Tab);

        let spaces: Wrapper = toml::from_str("indent = { spaces = 4 }").unwrap();
        assert_eq!(spaces.indent, Indent::Spaces(4));

        let custom: Wrapper = toml::from_str(r#"indent = { custom = "--" }"#).unwrap();
        assert_eq!(custom.indent, Indent::custom("--"));
    }
}
