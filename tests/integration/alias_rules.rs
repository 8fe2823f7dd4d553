use dirmap::{PathResolver, ResolverOptions};
use serde_json::json;
use std::path::{Path, PathBuf};

fn public_map() -> serde_json::Value {
    json!({ "src": { "public": { "_": { "alias": "@pub" }, "img": {} } } })
}

#[test]
fn alias_replaces_scoped_resolver() {
    let resolver = PathResolver::with_root("/proj", public_map()).unwrap();

    assert_eq!(
        resolver.get_alias_map().get("pub"),
        Some(Path::new("/proj/src/public"))
    );
    assert!(resolver.resolver("resolvePub").is_some());
    assert!(resolver.resolver("resolveSrcPublic").is_none());
    assert!(resolver.resolver("resolvePublic").is_none());
}

#[test]
fn duplicate_aliases_keeps_both_resolvers() {
    let resolver = PathResolver::with_root_and_options(
        "/proj",
        public_map(),
        ResolverOptions::new().duplicate_aliases(true),
    )
    .unwrap();

    let via_alias = resolver.resolve("resolvePub", "logo.svg");
    let via_scope = resolver.resolve("resolveSrcPublic", "logo.svg");
    assert_eq!(via_alias, Some(PathBuf::from("/proj/src/public/logo.svg")));
    assert_eq!(via_alias, via_scope);
}

#[test]
fn alias_rescopes_descendants() {
    let resolver = PathResolver::with_root("/proj", public_map()).unwrap();
    assert_eq!(
        resolver.resolve("resolvePubImg", ""),
        Some(PathBuf::from("/proj/src/public/img"))
    );
    assert!(resolver.resolver("resolveSrcPublicImg").is_none());
}

#[test]
fn hash_sigil_and_nested_alias_names() {
    let resolver = PathResolver::with_root(
        "/proj",
        json!({
            "nav": {
                "test": { "_": { "alias": "@nav/test" }, "fixtures": {} }
            },
            "assets": { "_": { "alias": "##assets" } }
        }),
    )
    .unwrap();

    let aliases = resolver.get_alias_map();
    assert_eq!(aliases.get("nav/test"), Some(Path::new("/proj/nav/test")));
    assert_eq!(aliases.get("assets"), Some(Path::new("/proj/assets")));
    assert!(resolver.resolver("resolveNavTest").is_some());
    assert!(resolver.resolver("resolveNavTestFixtures").is_some());
    assert!(resolver.resolver("resolveAssets").is_some());
}

#[test]
fn ignored_node_declares_no_alias() {
    let resolver = PathResolver::with_root(
        "/proj",
        json!({ "public": { "_": { "alias": "#public", "ignore": true }, "css": {} } }),
    )
    .unwrap();

    assert!(resolver.get_alias_map().is_empty());
    assert!(resolver.resolver("resolvePublic").is_none());
    // the alias still names the scope of its children
    assert!(resolver.resolver("resolvePublicCss").is_some());
}
