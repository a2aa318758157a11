//! The resolver contract.
//!
//! Every resolver implements [`Resolver`]: given a template name and the
//! current [`RenderContext`], return the [`Resource`] to render, or `None`
//! when the name is unknown to it. `None` is the only failure a resolver
//! reports, which is what lets resolvers nest:
//!
//! ```text
//! AggregateResolver
//!   ├─ TemplateMapResolver              "bar"     → Name("baz")
//!   └─ RelativeFallbackResolver
//!        └─ TemplatePathStack           "foo/bar" → Path(".../foo/bar.phtml")
//! ```

use crate::context::RenderContext;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What a resolver found for a template name.
///
/// Wrapping resolvers pass resources through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Another name or alias, as stored in a template map
    Name(String),
    /// A template file on disk
    Path(PathBuf),
}

impl Resource {
    /// The aliased name, if this is a [`Resource::Name`].
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Resource::Name(name) => Some(name),
            Resource::Path(_) => None,
        }
    }

    /// The file path, if this is a [`Resource::Path`].
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Resource::Path(path) => Some(path),
            Resource::Name(_) => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Name(name) => f.write_str(name),
            Resource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<String> for Resource {
    fn from(name: String) -> Self {
        Resource::Name(name)
    }
}

impl From<&str> for Resource {
    fn from(name: &str) -> Self {
        Resource::Name(name.to_string())
    }
}

impl From<PathBuf> for Resource {
    fn from(path: PathBuf) -> Self {
        Resource::Path(path)
    }
}

impl PartialEq<str> for Resource {
    fn eq(&self, other: &str) -> bool {
        self.as_name() == Some(other)
    }
}

impl PartialEq<&str> for Resource {
    fn eq(&self, other: &&str) -> bool {
        self.as_name() == Some(*other)
    }
}

impl PartialEq<Path> for Resource {
    fn eq(&self, other: &Path) -> bool {
        self.as_path() == Some(other)
    }
}

/// Maps a template name to a [`Resource`].
///
/// Implementations must not fail loudly: anything that prevents a lookup
/// is reported as `None`, so the caller can try the next resolver.
pub trait Resolver: Send + Sync {
    /// Resolve `name` for the views active in `cx`.
    fn resolve(&self, name: &str, cx: &RenderContext) -> Option<Resource>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, name: &str, cx: &RenderContext) -> Option<Resource> {
        (**self).resolve(name, cx)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn resolve(&self, name: &str, cx: &RenderContext) -> Option<Resource> {
        (**self).resolve(name, cx)
    }
}

impl<R: Resolver + ?Sized> Resolver for Arc<R> {
    fn resolve(&self, name: &str, cx: &RenderContext) -> Option<Resource> {
        (**self).resolve(name, cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    fn resolve_with<R: Resolver>(resolver: R, name: &str, cx: &RenderContext) -> Option<Resource> {
        resolver.resolve(name, cx)
    }

    impl Resolver for Echo {
        fn resolve(&self, name: &str, _cx: &RenderContext) -> Option<Resource> {
            Some(Resource::from(name))
        }
    }

    #[test]
    fn test_resource_compares_with_str() {
        let resource = Resource::from("foo/baz");
        assert_eq!(resource, "foo/baz");
        assert_ne!(Resource::Path(PathBuf::from("foo/baz")), "foo/baz");
    }

    #[test]
    fn test_resource_display() {
        assert_eq!(Resource::from("foo/baz").to_string(), "foo/baz");
        assert_eq!(
            Resource::Path(PathBuf::from("/tpl/foo/baz.phtml")).to_string(),
            PathBuf::from("/tpl/foo/baz.phtml").display().to_string()
        );
    }

    #[test]
    fn test_shared_resolvers_delegate() {
        let cx = RenderContext::new();
        let shared: Arc<dyn Resolver> = Arc::new(Echo);
        let boxed: Box<dyn Resolver> = Box::new(Echo);

        assert_eq!(shared.resolve("a", &cx), Some(Resource::from("a")));
        assert_eq!(boxed.resolve("b", &cx), Some(Resource::from("b")));
        assert_eq!(resolve_with(&Echo, "c", &cx), Some(Resource::from("c")));
    }
}
