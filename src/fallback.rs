//! Namespace-relative fallback resolution.
//!
//! Templates are usually grouped by namespace (`blog/index`, `blog/entry`,
//! `blog/sidebar`). While `blog/index` is being rendered, a reference to
//! the flat name `sidebar` most likely means `blog/sidebar`.
//! [`RelativeFallbackResolver`] implements exactly that:
//!
//! ```text
//! resolve("bar", cx)
//!   current view      "foo/zaz"
//!   namespace         "foo"           (before the first '/')
//!   candidate         "foo/bar"
//!   → base.resolve("foo/bar", cx)     returned unchanged
//! ```
//!
//! It gives up, without touching the base resolver, when no view is being
//! rendered or the current view's template has no namespace. It is meant to
//! sit behind a direct resolver in an
//! [`AggregateResolver`](crate::AggregateResolver), so that a top-level
//! `bar` still wins over `foo/bar`.
//!
//! # Example
//!
//! ```
//! use view_resolver::{
//!     RelativeFallbackResolver, RenderContext, Resolver, TemplateMapResolver, ViewModel,
//! };
//!
//! let resolver = RelativeFallbackResolver::new(TemplateMapResolver::from_iter([(
//!     "foo/bar", "foo/baz",
//! )]));
//!
//! let cx = RenderContext::with_root(ViewModel::new("foo/zaz"));
//! assert_eq!(resolver.resolve("bar", &cx).unwrap(), "foo/baz");
//!
//! assert!(resolver.resolve("bar", &RenderContext::new()).is_none());
//! ```

use crate::context::RenderContext;
use crate::name::{namespace_of, qualify};
use crate::resolver::{Resolver, Resource};
use crate::trace_log;

/// Resolves names inside the namespace of the view currently rendering.
#[derive(Debug, Clone, Default)]
pub struct RelativeFallbackResolver<R> {
    base: R,
}

impl<R: Resolver> RelativeFallbackResolver<R> {
    /// Wrap `base`, which receives the namespaced candidates.
    pub fn new(base: R) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &R {
        &self.base
    }

    pub fn into_inner(self) -> R {
        self.base
    }

    /// The name `resolve` would hand to the base resolver, if any.
    pub fn candidate(&self, name: &str, cx: &RenderContext) -> Option<String> {
        let Some(view) = cx.current_view() else {
            trace_log!("Relative fallback skipped '{}': no current view", name);
            return None;
        };

        let Some(namespace) = namespace_of(view.template()) else {
            trace_log!(
                "Relative fallback skipped '{}': current view '{}' has no namespace",
                name,
                view.template()
            );
            return None;
        };

        Some(qualify(namespace, name))
    }
}

impl<R: Resolver> Resolver for RelativeFallbackResolver<R> {
    fn resolve(&self, name: &str, cx: &RenderContext) -> Option<Resource> {
        let candidate = self.candidate(name, cx)?;
        trace_log!("Relative fallback: '{}' → '{}'", name, candidate);
        self.base.resolve(&candidate, cx)
    }
}
