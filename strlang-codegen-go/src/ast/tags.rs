//! Go struct field tags.

use indexmap::IndexMap;

/// Struct tags rendered as `` `key:"value" key:"value"` ``.
///
/// Tags keep insertion order; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTags {
    tags: IndexMap<String, String>,
}

impl FieldTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag (builder style).
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a tag.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// The tag literal including backquotes, e.g. `` `db:"id"` ``.
    pub fn render(&self) -> String {
        let pairs: Vec<String> = self
            .tags
            .iter()
            .map(|(key, value)| format!("{}:\"{}\"", key, value))
            .collect();
        format!("`{}`", pairs.join(" "))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldTags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = Self::new();
        for (key, value) in iter {
            tags.insert(key, value);
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tag() {
        let tags = FieldTags::new().tag("db", "user.first_name");
        assert_eq!(tags.render(), "`db:\"user.first_name\"`");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let tags = FieldTags::new()
            .tag("json", "name")
            .tag("db", "name")
            .tag("bson", "name");
        assert_eq!(tags.render(), "`json:\"name\" db:\"name\" bson:\"name\"`");
    }

    #[test]
    fn test_replacing_a_key_keeps_its_position() {
        let tags: FieldTags = [("json", "a"), ("db", "b"), ("json", "c")]
            .into_iter()
            .collect();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.render(), "`json:\"c\" db:\"b\"`");
    }
}
