//! Test utilities shared by the integration tests
//!
//! Provides fixtures, a call-counting resolver, and context builders.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use view_resolver::*;

/// Directory holding the template fixture tree
pub fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/templates")
}

/// Context whose current view renders `template`
pub fn rendering(template: &str) -> RenderContext {
    RenderContext::with_root(ViewModel::new(template))
}

/// Install env_logger once so `RUST_LOG=trace` shows resolver output
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Resolver that records every name it is asked for and never matches
#[derive(Debug, Default)]
pub struct SpyResolver {
    calls: AtomicUsize,
    names: Mutex<Vec<String>>,
}

impl SpyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `resolve` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Names passed to `resolve`, in call order
    pub fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

impl Resolver for SpyResolver {
    fn resolve(&self, name: &str, _cx: &RenderContext) -> Option<Resource> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.names.lock().unwrap().push(name.to_string());
        None
    }
}
