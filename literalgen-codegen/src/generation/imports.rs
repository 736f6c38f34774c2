//! Import alias allocation.

use indexmap::IndexMap;

/// Deduplicates package paths and hands out short, stable aliases.
///
/// The n-th distinct path gets `<prefix><n>` (`p0`, `p1`, ...). Aliases are
/// never reassigned, and iteration follows allocation order so the import
/// block is deterministic.
///
/// # Example
///
/// ```
/// use literalgen_codegen::ImportRegistry;
///
/// let mut imports = ImportRegistry::new();
/// assert_eq!(imports.resolve("example.com/geo"), "p0");
/// assert_eq!(imports.resolve("example.com/units"), "p1");
/// assert_eq!(imports.resolve("example.com/geo"), "p0");
/// assert_eq!(imports.resolve(""), "");
/// ```
#[derive(Debug, Clone)]
pub struct ImportRegistry {
    prefix: String,
    /// Package path -> alias, in allocation order
    aliases: IndexMap<String, String>,
}

impl ImportRegistry {
    /// Create an empty registry using the `p` alias prefix.
    pub fn new() -> Self {
        Self::with_prefix("p")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            aliases: IndexMap::new(),
        }
    }

    /// Alias for `path`, allocating one on first sight.
    ///
    /// The empty path (built-in and local types) needs no qualification and
    /// resolves to the empty alias without being recorded.
    pub fn resolve(&mut self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        if let Some(alias) = self.aliases.get(path) {
            return alias.clone();
        }
        let alias = format!("{}{}", self.prefix, self.aliases.len());
        tracing::trace!(path, %alias, "allocated import alias");
        self.aliases.insert(path.to_string(), alias.clone());
        alias
    }

    /// Alias already assigned to `path`, if any.
    pub fn alias(&self, path: &str) -> Option<&str> {
        self.aliases.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.aliases.contains_key(path)
    }

    /// Iterate `(path, alias)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(path, alias)| (path.as_str(), alias.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }
}

impl Default for ImportRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_aliases() {
        let mut imports = ImportRegistry::new();
        assert_eq!(imports.resolve("a/one"), "p0");
        assert_eq!(imports.resolve("a/two"), "p1");
        assert_eq!(imports.resolve("a/three"), "p2");
        assert_eq!(imports.len(), 3);
    }

    #[test]
    fn test_stable_on_repeat() {
        let mut imports = ImportRegistry::new();
        let first = imports.resolve("a/one");
        imports.resolve("a/two");
        assert_eq!(imports.resolve("a/one"), first);
        assert_eq!(imports.alias("a/two"), Some("p1"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_empty_path_is_not_recorded() {
        let mut imports = ImportRegistry::new();
        assert_eq!(imports.resolve(""), "");
        assert!(imports.is_empty());
        assert!(!imports.contains(""));
    }

    #[test]
    fn test_iteration_follows_allocation_order() {
        let mut imports = ImportRegistry::with_prefix("pkg");
        for path in ["z/last", "a/first", "m/middle"] {
            imports.resolve(path);
        }

        let entries: Vec<_> = imports.iter().collect();
        assert_eq!(
            entries,
            vec![("z/last", "pkg0"), ("a/first", "pkg1"), ("m/middle", "pkg2")]
        );
    }
}
