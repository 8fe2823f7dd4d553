use dirmap::{ErrorPolicy, PathResolver, ResolverError, ResolverOptions, TableKind};
use serde_json::json;
use std::path::Path;

#[test]
fn four_arguments_are_rejected() {
    let err = PathResolver::from_args(&[json!("/proj"), json!({}), json!({}), json!({})])
        .unwrap_err();
    assert!(matches!(err, ResolverError::InvalidArguments(_)));
}

#[test]
fn unsupported_argument_types_are_rejected() {
    let err = PathResolver::from_args(&[json!(42)]).unwrap_err();
    assert!(matches!(err, ResolverError::InvalidArguments(_)));

    let err = PathResolver::from_args(&[json!({}), json!("/proj")]).unwrap_err();
    assert!(matches!(err, ResolverError::InvalidArguments(_)));
}

#[test]
fn forced_key_collision_fails() {
    let err = PathResolver::with_root(
        "/proj",
        json!({ "src": { "_": { "name": "lib" } }, "lib": {} }),
    )
    .unwrap_err();

    match err {
        ResolverError::DuplicateKey { table, key } => {
            assert_eq!(table, TableKind::Resolvers);
            assert_eq!(key, "resolveLib");
        }
        other => panic!("expected a duplicate key, got {other}"),
    }
}

#[test]
fn alias_collision_fails() {
    let err = PathResolver::with_root(
        "/proj",
        json!({
            "a": { "_": { "alias": "@shared" } },
            "b": { "_": { "alias": "#shared" } }
        }),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ResolverError::DuplicateKey {
            table: TableKind::Aliases,
            ..
        }
    ));
}

#[test]
fn report_policy_skips_only_the_conflict() {
    let resolver = PathResolver::with_root_and_options(
        "/proj",
        json!({ "src": { "_": { "name": "lib" }, "util": {} }, "lib": { "extra": {} } }),
        ResolverOptions::new().on_error(ErrorPolicy::Report),
    )
    .unwrap();

    // first registration wins
    assert_eq!(
        resolver.resolver("resolveLib").unwrap().base(),
        Path::new("/proj/src")
    );
    assert!(resolver.resolver("resolveLibUtil").is_some());
    assert_eq!(
        resolver.resolver("resolveLibExtra").unwrap().base(),
        Path::new("/proj/lib/extra")
    );
}

#[test]
fn alias_clashing_with_a_resolver_leaves_no_alias_behind() {
    let resolver = PathResolver::with_root_and_options(
        "/proj",
        json!({ "src": {}, "lib": { "_": { "alias": "@src" } } }),
        ResolverOptions::new().on_error(ErrorPolicy::Report),
    )
    .unwrap();

    assert!(resolver.get_alias_map().get("src").is_none());
    assert_eq!(
        resolver.resolve("resolveLib", "index.js"),
        Some(Path::new("/proj/lib/index.js").to_path_buf())
    );
    assert_eq!(
        resolver.resolve("resolveSrc", ""),
        Some(Path::new("/proj/src").to_path_buf())
    );
}

#[test]
fn malformed_nodes_fail_by_default() {
    for map in [
        json!({ "src": 42 }),
        json!({ "src": ["a.js"] }),
        json!({ "src": null }),
        json!({ "src": "no-extension" }),
        json!({ "src": { "_": "not-an-object" } }),
    ] {
        let err = PathResolver::with_root("/proj", map.clone()).unwrap_err();
        assert!(
            matches!(err, ResolverError::MalformedNode { .. }),
            "expected malformed node for {map}"
        );
    }
}

#[test]
fn malformed_nodes_are_dropped_when_reported() {
    let resolver = PathResolver::with_root_and_options(
        "/proj",
        json!({ "broken": true, "src": { "ok": "ok.js", "bad": 3 } }),
        ResolverOptions::new().on_error(ErrorPolicy::Report),
    )
    .unwrap();

    assert!(resolver.files().get("broken").is_none());
    assert!(resolver.files().lookup(&["src", "bad"]).is_none());
    assert_eq!(
        resolver.files().lookup(&["src", "ok"]).unwrap().path(),
        Path::new("/proj/src/ok.js")
    );
}
