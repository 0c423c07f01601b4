//! Test utilities for emitters.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

/// Assert that two strings are equal, with a line-by-line diff on failure.
///
/// Whitespace is shown escaped so that indentation mistakes are visible.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.split('\n').collect();
        let actual_lines: Vec<&str> = actual.split('\n').collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied();
            let act = actual_lines.get(i).copied();

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", escaped(exp)));
                diff.push_str(&format!("  actual:   {}\n", escaped(act)));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

fn escaped(line: Option<&str>) -> String {
    match line {
        Some(line) => format!("{:?}", line),
        None => "<missing>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_content_passes() {
        assert_content_eq("a\n\tb\n", "a\n\tb\n");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_indentation_difference_is_reported() {
        assert_content_eq("a\n\tb\n", "a\n  b\n");
    }

    #[test]
    #[should_panic(expected = "<missing>")]
    fn test_missing_line_is_reported() {
        assert_content_eq("a\nb", "a");
    }
}
