//! Render context passed to every resolver.
//!
//! A [`RenderContext`] records which views are being rendered while a
//! template name is looked up. Views nest: a layout renders a page, the
//! page renders a partial. The context keeps that chain as a stack:
//!
//! ```text
//! [0] ViewModel("layout/main")     ← root_view()
//! [1] ViewModel("blog/index")
//! [2] ViewModel("blog/entry")      ← current_view()
//! ```
//!
//! Resolvers only read the context. Entering a nested view produces a new
//! context via [`RenderContext::enter`] and leaves the parent untouched, so
//! a context can be shared freely between the members of a resolver chain.
//!
//! # Example
//!
//! ```
//! use view_resolver::{RenderContext, ViewModel};
//!
//! let layout = RenderContext::with_root(ViewModel::new("layout/main"));
//! let page = layout.enter(ViewModel::new("blog/index"));
//!
//! assert_eq!(page.depth(), 2);
//! assert_eq!(page.current_view().unwrap().template(), "blog/index");
//! assert_eq!(page.root_view().unwrap().template(), "layout/main");
//! assert_eq!(layout.current_view().unwrap().template(), "layout/main");
//! ```

use crate::name::namespace_of;
use std::sync::Arc;

// ============================================================================
// ViewModel
// ============================================================================

/// A renderable view, identified by its template name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    template: String,
}

impl ViewModel {
    /// Create a view rendering `template`.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Template name of this view.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Replace the template name.
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Namespace of the template name, see [`namespace_of`].
    pub fn namespace(&self) -> Option<&str> {
        namespace_of(&self.template)
    }
}

// ============================================================================
// RenderContext
// ============================================================================

/// The views currently being rendered, outermost first.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    views: Vec<Arc<ViewModel>>,
}

impl RenderContext {
    /// Create a context with no active view.
    pub fn new() -> Self {
        Self { views: Vec::new() }
    }

    /// Create a context whose root (and current) view is `view`.
    pub fn with_root(view: impl Into<Arc<ViewModel>>) -> Self {
        Self {
            views: vec![view.into()],
        }
    }

    /// Return a new context that renders `view` inside the current one.
    pub fn enter(&self, view: impl Into<Arc<ViewModel>>) -> Self {
        let mut views = Vec::with_capacity(self.views.len() + 1);
        views.extend(self.views.iter().cloned());
        views.push(view.into());
        Self { views }
    }

    /// The innermost view being rendered.
    pub fn current_view(&self) -> Option<&Arc<ViewModel>> {
        self.views.last()
    }

    /// The outermost view being rendered.
    pub fn root_view(&self) -> Option<&Arc<ViewModel>> {
        self.views.first()
    }

    /// The view rendering the current one, if any.
    pub fn parent_view(&self) -> Option<&Arc<ViewModel>> {
        self.views.len().checked_sub(2).and_then(|i| self.views.get(i))
    }

    /// Number of nested views.
    pub fn depth(&self) -> usize {
        self.views.len()
    }

    /// Return `true` if no view is being rendered.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// All active views, outermost first.
    pub fn views(&self) -> &[Arc<ViewModel>] {
        &self.views
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context() {
        let cx = RenderContext::new();
        assert!(cx.is_empty());
        assert_eq!(cx.depth(), 0);
        assert!(cx.current_view().is_none());
        assert!(cx.root_view().is_none());
        assert!(cx.parent_view().is_none());
    }

    #[test]
    fn test_enter_does_not_touch_parent() {
        let root = RenderContext::with_root(ViewModel::new("layout/main"));
        let nested = root.enter(ViewModel::new("foo/zaz"));

        assert_eq!(root.depth(), 1);
        assert_eq!(nested.depth(), 2);
        assert_eq!(nested.parent_view().unwrap().template(), "layout/main");
        assert_eq!(nested.current_view().unwrap().template(), "foo/zaz");
    }

    #[test]
    fn test_shared_view_is_not_copied() {
        let view = Arc::new(ViewModel::new("foo/zaz"));
        let cx = RenderContext::with_root(Arc::clone(&view));
        assert!(Arc::ptr_eq(cx.current_view().unwrap(), &view));
    }

    #[test]
    fn test_views_outermost_first() {
        let cx = RenderContext::with_root(ViewModel::new("layout/main"))
            .enter(ViewModel::new("blog/index"))
            .enter(ViewModel::new("blog/entry"));

        let templates: Vec<&str> = cx.views().iter().map(|v| v.template()).collect();
        assert_eq!(templates, vec!["layout/main", "blog/index", "blog/entry"]);
        assert_eq!(cx.parent_view().unwrap().template(), "blog/index");
    }

    #[test]
    fn test_view_model_namespace() {
        let mut view = ViewModel::new("foo/zaz");
        assert_eq!(view.namespace(), Some("foo"));

        view.set_template("zaz");
        assert_eq!(view.namespace(), None);
    }
}
