//! Explicit name-to-target template maps.
//!
//! [`TemplateMapResolver`] is the cheapest resolver: an exact-match lookup
//! in a map of template names. It ignores the render context entirely.
//!
//! ```
//! use view_resolver::{RenderContext, Resolver, TemplateMapResolver};
//!
//! let map = TemplateMapResolver::from_iter([("foo/bar", "foo/baz"), ("bar", "baz")]);
//! let cx = RenderContext::new();
//!
//! assert_eq!(map.resolve("bar", &cx).unwrap(), "baz");
//! assert!(map.resolve("foo", &cx).is_none());
//! ```

use crate::context::RenderContext;
use crate::resolver::{Resolver, Resource};
use crate::trace_log;
use std::collections::HashMap;

/// Resolves template names through a fixed map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateMapResolver {
    map: HashMap<String, String>,
}

impl TemplateMapResolver {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `name` to `target`, replacing any previous entry.
    pub fn add(&mut self, name: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.map.insert(name.into(), target.into());
        self
    }

    /// Add every entry of `entries`. Later entries win.
    pub fn merge<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.map
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Replace the whole map with `entries`.
    pub fn set_map<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.map.clear();
        self.merge(entries)
    }

    /// Return `true` if `name` is mapped.
    pub fn has(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Target for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    /// Remove `name`, returning its target.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.map.remove(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(name, target)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateMapResolver
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut resolver = Self::new();
        resolver.merge(entries);
        resolver
    }
}

impl Resolver for TemplateMapResolver {
    fn resolve(&self, name: &str, _cx: &RenderContext) -> Option<Resource> {
        let target = self.map.get(name)?;
        trace_log!("Template map: '{}' → '{}'", name, target);
        Some(Resource::Name(target.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut map = TemplateMapResolver::new();
        map.add("layout", "layout/main").add("error", "error/index");

        assert_eq!(map.len(), 2);
        assert!(map.has("layout"));
        assert_eq!(map.get("error"), Some("error/index"));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_merge_overrides() {
        let mut map = TemplateMapResolver::from_iter([("a", "1"), ("b", "2")]);
        map.merge([("b", "3"), ("c", "4")]);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("b"), Some("3"));
    }

    #[test]
    fn test_set_map_replaces() {
        let mut map = TemplateMapResolver::from_iter([("a", "1")]);
        map.set_map([("b", "2")]);

        assert!(!map.has("a"));
        assert_eq!(map.get("b"), Some("2"));
    }

    #[test]
    fn test_remove() {
        let mut map = TemplateMapResolver::from_iter([("a", "1")]);
        assert_eq!(map.remove("a"), Some("1".to_string()));
        assert!(map.is_empty());
        assert_eq!(map.remove("a"), None);
    }

    #[test]
    fn test_resolve_exact_match_only() {
        let map = TemplateMapResolver::from_iter([("foo/bar", "foo/baz")]);
        let cx = RenderContext::new();

        assert_eq!(map.resolve("foo/bar", &cx), Some(Resource::from("foo/baz")));
        assert!(map.resolve("bar", &cx).is_none());
        assert!(map.resolve("foo/bar/", &cx).is_none());
    }
}
