//! Resolution caching.
//!
//! This module provides [`CachingResolver`], which memoizes the results of
//! any resolver in an LRU cache. It is gated behind the `cache` feature
//! flag and uses the [`lru`] crate internally.
//!
//! Results can depend on the render context (a
//! [`RelativeFallbackResolver`](crate::RelativeFallbackResolver) looks at the
//! current view, other resolvers may look at any outer view), so entries are
//! keyed by the requested name *and* the templates of every active view,
//! outermost first. Misses are cached too: a path stack that
//! did not find a file keeps not finding it until [`CachingResolver::clear`].
//!
//! [`CacheStats`] tracks hits, misses, and invalidations.
//!
//! # Examples
//!
//! ```
//! use view_resolver::cache::CachingResolver;
//! use view_resolver::{RenderContext, Resolver, TemplateMapResolver};
//!
//! let cached = CachingResolver::new(TemplateMapResolver::from_iter([("bar", "baz")]));
//! let cx = RenderContext::new();
//!
//! assert_eq!(cached.resolve("bar", &cx).unwrap(), "baz");
//! assert_eq!(cached.resolve("bar", &cx).unwrap(), "baz");
//! assert_eq!(cached.stats().hits, 1);
//! assert_eq!(cached.stats().misses, 1);
//! ```

use crate::context::RenderContext;
use crate::resolver::{Resolver, Resource};
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Cache key: requested name plus the templates of the whole view stack
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    name: String,
    view_templates: Vec<String>,
}

impl CacheKey {
    fn new(name: &str, cx: &RenderContext) -> Self {
        Self {
            name: name.to_string(),
            view_templates: cx
                .views()
                .iter()
                .map(|v| v.template().to_string())
                .collect(),
        }
    }
}

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: usize,
    /// Lookups forwarded to the wrapped resolver.
    pub misses: usize,
    /// Number of full cache invalidations (via [`CachingResolver::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
struct CacheState {
    entries: LruCache<CacheKey, Option<Resource>>,
    stats: CacheStats,
}

/// LRU cache in front of another resolver.
#[derive(Debug)]
pub struct CachingResolver<R> {
    inner: R,
    state: Mutex<CacheState>,
}

impl<R: Resolver> CachingResolver<R> {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(capacity) => capacity,
        None => unreachable!(),
    };

    /// Wrap `inner` with the default capacity (1000 entries).
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, Self::DEFAULT_CAPACITY)
    }

    /// Wrap `inner` with a custom capacity.
    pub fn with_capacity(inner: R, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            state: Mutex::new(CacheState {
                entries: LruCache::new(capacity),
                stats: CacheStats::default(),
            }),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    // Poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drop every cached entry and increment the invalidation counter.
    pub fn clear(&self) {
        let mut state = self.lock();
        let removed = state.entries.len();
        state.entries.clear();
        state.stats.invalidations += 1;
        debug_log!(
            "Resolver cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            removed,
            state.stats.invalidations,
            state.stats.hit_rate() * 100.0
        );
    }

    /// Snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats.clone()
    }

    /// Reset all counters in [`CacheStats`] to zero.
    pub fn reset_stats(&self) {
        self.lock().stats = CacheStats::default();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Resolver> Resolver for CachingResolver<R> {
    fn resolve(&self, name: &str, cx: &RenderContext) -> Option<Resource> {
        let key = CacheKey::new(name, cx);

        {
            let mut state = self.lock();
            if let Some(cached) = state.entries.get(&key).cloned() {
                state.stats.hits += 1;
                trace_log!("Resolver cache hit for '{}'", name);
                return cached;
            }
            state.stats.misses += 1;
        }

        // Lock released while the inner resolver runs.
        trace_log!("Resolver cache miss for '{}'", name);
        let resolved = self.inner.resolve(name, cx);
        self.lock().entries.push(key, resolved.clone());
        resolved
    }
}
