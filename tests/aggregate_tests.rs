//! Integration tests for resolver chains built from several strategies

mod common;

use common::*;
use std::fs;
use std::sync::Arc;
use view_resolver::*;

fn application_resolver() -> AggregateResolver {
    let map = TemplateMapResolver::from_iter([("layout", "layout/custom")]);
    let stack = Arc::new(TemplatePathStack::new().with_path(templates_dir()));

    let mut aggregate = AggregateResolver::new();
    aggregate
        .attach_with_priority(map, 100)
        .attach(Arc::clone(&stack))
        .attach_with_priority(RelativeFallbackResolver::new(stack), 0);
    aggregate
}

#[test]
fn test_map_outranks_path_stack() {
    let resolver = application_resolver();
    assert_eq!(
        resolver.resolve("layout", &RenderContext::new()).unwrap(),
        "layout/custom"
    );
}

#[test]
fn test_path_stack_before_fallback() {
    let resolver = application_resolver();
    let resolved = resolver
        .resolve("name-space/bar", &rendering("other/view"))
        .unwrap();
    assert_eq!(
        resolved.as_path(),
        Some(
            fs::canonicalize(templates_dir().join("name-space/bar.phtml"))
                .unwrap()
                .as_path()
        )
    );
}

#[test]
fn test_fallback_is_last_resort() {
    let resolver = application_resolver();
    let cx = rendering("name-space/any-view");

    let resolved = resolver.try_resolve("bar", &cx).unwrap();
    assert!(resolved.to_string().ends_with("bar.phtml"));

    let err = resolver.try_resolve("missing", &cx).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.name(), Some("missing"));
}

#[test]
fn test_boxed_members() {
    let members: Vec<Box<dyn Resolver>> = vec![
        Box::new(TemplateMapResolver::from_iter([("a", "1")])),
        Box::new(TemplateMapResolver::from_iter([("b", "2")])),
    ];

    let mut aggregate = AggregateResolver::new();
    for member in members {
        aggregate.attach(member);
    }

    assert_eq!(aggregate.len(), 2);
    assert_eq!(aggregate.resolve("b", &RenderContext::new()).unwrap(), "2");
}

#[test]
fn test_nested_aggregates() {
    let mut inner = AggregateResolver::new();
    inner.attach(TemplateMapResolver::from_iter([("foo/bar", "foo/baz")]));

    let mut outer = AggregateResolver::new();
    outer.attach(RelativeFallbackResolver::new(inner));

    assert_eq!(outer.resolve("bar", &rendering("foo/zaz")).unwrap(), "foo/baz");
}
