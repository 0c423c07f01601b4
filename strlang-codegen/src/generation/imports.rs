//! Import collection utilities.

use indexmap::IndexSet;

/// Tracks import names and deduplicates them.
///
/// Names keep the position of their first insertion, so rendering is
/// deterministic and follows the order the caller first asked for them.
///
/// # Example
///
/// ```
/// use strlang_codegen::generation::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.extend(["fmt", "strings", "fmt"]);
///
/// let names: Vec<&str> = imports.iter().collect();
/// assert_eq!(names, ["fmt", "strings"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    names: IndexSet<String>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns `false` if it was already present.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Check if a name is already imported.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over all names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get the number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<String>> Extend<S> for ImportSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.add(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ImportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
