//! Ordered chains of resolvers.
//!
//! [`AggregateResolver`] asks each attached resolver in turn and returns the
//! first hit. Order is decided by priority (higher first), then by attach
//! order. This is where the direct-before-fallback precedence comes from:
//!
//! ```
//! use std::sync::Arc;
//! use view_resolver::{
//!     AggregateResolver, RelativeFallbackResolver, RenderContext, Resolver,
//!     TemplateMapResolver, ViewModel,
//! };
//!
//! let map = Arc::new(TemplateMapResolver::from_iter([("foo/bar", "foo/baz"), ("bar", "baz")]));
//!
//! let mut aggregate = AggregateResolver::new();
//! aggregate.attach(Arc::clone(&map));
//! aggregate.attach(RelativeFallbackResolver::new(map));
//!
//! let cx = RenderContext::with_root(ViewModel::new("foo/zaz"));
//! assert_eq!(aggregate.resolve("bar", &cx).unwrap(), "baz");
//! ```

use crate::context::RenderContext;
use crate::error::{ResolveError, ResolveResult};
use crate::resolver::{Resolver, Resource};
use crate::{debug_log, trace_log};
use std::fmt;

/// Priority used by [`AggregateResolver::attach`].
pub const DEFAULT_PRIORITY: i32 = 1;

struct Entry {
    priority: i32,
    resolver: Box<dyn Resolver>,
}

/// Tries a list of resolvers in priority order.
#[derive(Default)]
pub struct AggregateResolver {
    entries: Vec<Entry>,
}

impl AggregateResolver {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a resolver with [`DEFAULT_PRIORITY`].
    pub fn attach<R: Resolver + 'static>(&mut self, resolver: R) -> &mut Self {
        self.attach_with_priority(resolver, DEFAULT_PRIORITY)
    }

    /// Attach a resolver. Higher priorities are asked first; resolvers with
    /// equal priority are asked in attach order.
    pub fn attach_with_priority<R: Resolver + 'static>(
        &mut self,
        resolver: R,
        priority: i32,
    ) -> &mut Self {
        let index = self.entries.partition_point(|e| e.priority >= priority);
        self.entries.insert(
            index,
            Entry {
                priority,
                resolver: Box::new(resolver),
            },
        );
        debug_log!(
            "Attached resolver at position {} with priority {} ({} total)",
            index,
            priority,
            self.entries.len()
        );
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Priorities in lookup order.
    pub fn priorities(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|e| e.priority)
    }

    /// Resolve `name`, reporting why nothing matched.
    pub fn try_resolve(&self, name: &str, cx: &RenderContext) -> ResolveResult<Resource> {
        if self.entries.is_empty() {
            return Err(ResolveError::NoResolvers);
        }

        for (position, entry) in self.entries.iter().enumerate() {
            if let Some(resource) = entry.resolver.resolve(name, cx) {
                trace_log!("Aggregate resolved '{}' at position {}", name, position);
                return Ok(resource);
            }
        }

        Err(ResolveError::NotFound {
            name: name.to_string(),
        })
    }
}

impl fmt::Debug for AggregateResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateResolver")
            .field("priorities", &self.priorities().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Resolver for AggregateResolver {
    fn resolve(&self, name: &str, cx: &RenderContext) -> Option<Resource> {
        self.try_resolve(name, cx).ok()
    }
}
