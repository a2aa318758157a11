//! Template lookup over a stack of search directories.
//!
//! [`TemplatePathStack`] turns a template name into a file under one of its
//! search paths. Paths form a stack: the most recently added directory is
//! searched first, so an application can override a module's templates by
//! adding its own directory afterwards.
//!
//! # Lookup
//!
//! For `name = "name-space/bar"` and paths `[modules, app]`:
//!
//! ```text
//! 1. append the default suffix      → "name-space/bar.phtml"
//! 2. try app/name-space/bar.phtml   (added last, searched first)
//! 3. try modules/name-space/bar.phtml
//! 4. first regular file wins        → canonical path
//! ```
//!
//! Names that already carry an extension (`bar.twig`) are used as is.
//! Names containing `../` are refused while parent traversal protection is
//! on, which is the default.

use crate::context::RenderContext;
use crate::error::{ResolveError, ResolveResult};
use crate::name::{has_extension, is_parent_traversal};
use crate::resolver::{Resolver, Resource};
use crate::{debug_log, trace_log, warn_log};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to names without an extension.
pub const DEFAULT_SUFFIX: &str = "phtml";

/// Resolves template names to files under a stack of directories.
#[derive(Debug, Clone)]
pub struct TemplatePathStack {
    paths: Vec<PathBuf>,
    default_suffix: String,
    lfi_protection: bool,
}

impl TemplatePathStack {
    /// Create a stack without search paths.
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            default_suffix: DEFAULT_SUFFIX.to_string(),
            lfi_protection: true,
        }
    }

    /// Builder form of [`add_path`](Self::add_path).
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_path(path);
        self
    }

    /// Builder form of [`set_default_suffix`](Self::set_default_suffix).
    pub fn with_default_suffix(mut self, suffix: &str) -> Self {
        self.set_default_suffix(suffix);
        self
    }

    /// Push a directory on top of the stack.
    pub fn add_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        let path = path.into();
        if !path.is_dir() {
            warn_log!("Template path '{}' is not a directory", path.display());
        }
        debug_log!("Adding template path '{}'", path.display());
        self.paths.push(path);
        self
    }

    /// Push several directories, in order.
    pub fn add_paths<I, P>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        for path in paths {
            self.add_path(path);
        }
        self
    }

    /// Replace all search paths.
    pub fn set_paths<I, P>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.clear_paths();
        self.add_paths(paths)
    }

    /// Remove all search paths.
    pub fn clear_paths(&mut self) {
        self.paths.clear();
    }

    /// Search paths in the order they were added; lookup walks them in reverse.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Set the suffix used for names without an extension.
    ///
    /// A leading dot is ignored: `".twig"` and `"twig"` are the same.
    pub fn set_default_suffix(&mut self, suffix: &str) -> &mut Self {
        self.default_suffix = suffix.trim_start_matches('.').to_string();
        self
    }

    pub fn default_suffix(&self) -> &str {
        &self.default_suffix
    }

    /// Enable or disable the `../` check.
    pub fn set_lfi_protection(&mut self, enabled: bool) -> &mut Self {
        self.lfi_protection = enabled;
        self
    }

    pub fn is_lfi_protection_on(&self) -> bool {
        self.lfi_protection
    }

    /// Resolve `name` to a canonical file path, reporting why it failed.
    pub fn try_resolve(&self, name: &str) -> ResolveResult<PathBuf> {
        if self.paths.is_empty() {
            return Err(ResolveError::NoPaths);
        }

        if self.lfi_protection && is_parent_traversal(name) {
            return Err(ResolveError::ParentTraversal {
                name: name.to_string(),
            });
        }

        let relative = name.trim_start_matches(['/', '\\']);
        let file = if has_extension(relative) || self.default_suffix.is_empty() {
            relative.to_string()
        } else {
            format!("{}.{}", relative, self.default_suffix)
        };

        self.paths
            .iter()
            .rev()
            .find_map(|dir| find_file(dir, &file))
            .ok_or_else(|| ResolveError::NotFound {
                name: name.to_string(),
            })
    }
}

impl Default for TemplatePathStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical path of `dir/file` if it is a regular file.
fn find_file(dir: &Path, file: &str) -> Option<PathBuf> {
    let candidate = dir.join(file);
    if !candidate.is_file() {
        return None;
    }
    match fs::canonicalize(&candidate) {
        Ok(path) => {
            trace_log!("Found template '{}'", path.display());
            Some(path)
        }
        Err(err) => {
            trace_log!(
                "Could not canonicalize '{}': {}",
                candidate.display(),
                err
            );
            None
        }
    }
}

impl Resolver for TemplatePathStack {
    fn resolve(&self, name: &str, _cx: &RenderContext) -> Option<Resource> {
        match self.try_resolve(name) {
            Ok(path) => Some(Resource::Path(path)),
            Err(err) => {
                trace_log!("Path stack skipped '{}': {}", name, err);
                None
            }
        }
    }
}
