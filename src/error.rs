//! Error handling for resolvers.
//!
//! The [`Resolver`](crate::Resolver) contract folds every failure into
//! `None`, so that an [`AggregateResolver`](crate::AggregateResolver) can
//! simply move on to the next member. Callers that want to know *why* a
//! lookup failed use the `try_resolve` methods, which return a
//! [`ResolveError`] instead.
//!
//! # Examples
//!
//! ```
//! use view_resolver::{AggregateResolver, RenderContext, ResolveError};
//!
//! let aggregate = AggregateResolver::new();
//! let err = aggregate
//!     .try_resolve("layout", &RenderContext::new())
//!     .unwrap_err();
//!
//! assert_eq!(err, ResolveError::NoResolvers);
//! assert_eq!(err.to_string(), "No resolvers attached");
//! ```

use std::fmt;

/// Result alias used by the `try_resolve` methods.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Reasons a template name could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An aggregate was asked to resolve without any members
    NoResolvers,

    /// A path stack was asked to resolve without any search paths
    NoPaths,

    /// The name tried to escape the search paths with `..`
    ParentTraversal { name: String },

    /// No resolver knew the name
    NotFound { name: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NoResolvers => write!(f, "No resolvers attached"),
            ResolveError::NoPaths => write!(f, "No template paths configured"),
            ResolveError::ParentTraversal { name } => {
                write!(f, "Parent directory traversal is not allowed: {}", name)
            }
            ResolveError::NotFound { name } => {
                write!(f, "Template not found: {}", name)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

impl ResolveError {
    /// Check if the error means the name is simply unknown
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }

    /// Check if the resolver was misconfigured rather than the name missing
    pub fn is_configuration(&self) -> bool {
        matches!(self, ResolveError::NoResolvers | ResolveError::NoPaths)
    }

    /// The template name the error refers to, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            ResolveError::ParentTraversal { name } | ResolveError::NotFound { name } => Some(name),
            ResolveError::NoResolvers | ResolveError::NoPaths => None,
        }
    }
}
