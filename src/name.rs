//! Template name helpers
//!
//! Template names are plain strings. A name is *namespaced* when it has a
//! non-empty prefix before the first [`SEPARATOR`]:
//!
//! ```text
//! bar              flat, no namespace
//! foo/bar          namespace "foo"
//! foo/partials/bar namespace "foo"
//! /bar             flat, the namespace would be empty
//! ```
//!
//! All helpers borrow from their input and never allocate, except
//! [`qualify`] which builds a new name.

/// Separator between a namespace and the rest of a template name
pub const SEPARATOR: char = '/';

/// Return the namespace of a template name.
///
/// The namespace is everything before the first [`SEPARATOR`]. Names
/// without a separator, or with an empty prefix, have no namespace.
///
/// # Examples
///
/// ```
/// use view_resolver::name::namespace_of;
///
/// assert_eq!(namespace_of("foo/zaz"), Some("foo"));
/// assert_eq!(namespace_of("foo/partials/row"), Some("foo"));
/// assert_eq!(namespace_of("zaz"), None);
/// assert_eq!(namespace_of("/zaz"), None);
/// ```
#[must_use]
pub fn namespace_of(name: &str) -> Option<&str> {
    match name.split_once(SEPARATOR) {
        Some((namespace, _)) if !namespace.is_empty() => Some(namespace),
        _ => None,
    }
}

/// Prefix `name` with `namespace`.
///
/// Existing prefixes on `name` are kept: `qualify("foo", "foo/bar")` is
/// `"foo/foo/bar"`.
#[must_use]
pub fn qualify(namespace: &str, name: &str) -> String {
    let mut qualified = String::with_capacity(namespace.len() + 1 + name.len());
    qualified.push_str(namespace);
    qualified.push(SEPARATOR);
    qualified.push_str(name);
    qualified
}

/// Final segment of a name, after the last `/` or `\`.
#[inline]
pub(crate) fn basename(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Check whether the final segment of a name carries a file extension.
///
/// A leading dot (`.hidden`) or a trailing dot (`bar.`) does not count.
///
/// ```
/// use view_resolver::name::has_extension;
///
/// assert!(has_extension("layout/main.phtml"));
/// assert!(!has_extension("layout.d/main"));
/// assert!(!has_extension("bar."));
/// ```
#[must_use]
pub fn has_extension(name: &str) -> bool {
    let base = basename(name);
    match base.rfind('.') {
        Some(pos) => pos > 0 && pos + 1 < base.len(),
        None => false,
    }
}

/// Check whether a name tries to climb out of its search root.
///
/// Matches `../` and `..\` anywhere in the name.
#[must_use]
pub fn is_parent_traversal(name: &str) -> bool {
    name.contains("../") || name.contains("..\\")
}
