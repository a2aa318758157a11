//! # view-resolver
//!
//! Template name resolution for view rendering.
//!
//! A view layer renders templates by name (`"blog/index"`, `"layout"`).
//! Turning such a name into something renderable is the job of a
//! [`Resolver`]. This crate provides the resolvers and the glue to chain
//! them:
//!
//! - [`TemplateMapResolver`] — explicit name → target map.
//! - [`TemplatePathStack`] — searches a stack of template directories.
//! - [`AggregateResolver`] — tries several resolvers in priority order.
//! - [`RelativeFallbackResolver`] — resolves a flat name inside the
//!   namespace of the view currently being rendered.
//! - [`CachingResolver`](cache::CachingResolver) — LRU memoization (feature
//!   `cache`).
//!
//! Every resolver receives a [`RenderContext`] describing the views being
//! rendered, and reports failure as `None` so that chains can move on to
//! the next member.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use view_resolver::{
//!     AggregateResolver, RelativeFallbackResolver, RenderContext, Resolver,
//!     TemplateMapResolver, ViewModel,
//! };
//!
//! let map = Arc::new(TemplateMapResolver::from_iter([
//!     ("blog/sidebar", "templates/blog/sidebar.phtml"),
//!     ("layout", "templates/layout.phtml"),
//! ]));
//!
//! let mut resolver = AggregateResolver::new();
//! resolver.attach(Arc::clone(&map));
//! resolver.attach(RelativeFallbackResolver::new(map));
//!
//! let cx = RenderContext::with_root(ViewModel::new("layout"))
//!     .enter(ViewModel::new("blog/index"));
//!
//! assert_eq!(resolver.resolve("layout", &cx).unwrap(), "templates/layout.phtml");
//! assert_eq!(resolver.resolve("sidebar", &cx).unwrap(), "templates/blog/sidebar.phtml");
//! ```
//!
//! # Features
//!
//! | Feature   | Default | Purpose                                   |
//! |-----------|---------|-------------------------------------------|
//! | `log`     | yes     | log through the `log` crate               |
//! | `tracing` | no      | log through `tracing` instead             |
//! | `cache`   | yes     | [`cache::CachingResolver`] on top of `lru` |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

pub mod aggregate;
#[cfg(feature = "cache")]
#[cfg_attr(docsrs, doc(cfg(feature = "cache")))]
pub mod cache;
pub mod context;
pub mod error;
pub mod fallback;
pub mod map;
pub mod name;
pub mod path_stack;
pub mod resolver;

pub use aggregate::{AggregateResolver, DEFAULT_PRIORITY};
#[cfg(feature = "cache")]
pub use cache::{CacheStats, CachingResolver};
pub use context::{RenderContext, ViewModel};
pub use error::{ResolveError, ResolveResult};
pub use fallback::RelativeFallbackResolver;
pub use map::TemplateMapResolver;
pub use path_stack::{TemplatePathStack, DEFAULT_SUFFIX};
pub use resolver::{Resolver, Resource};
