use dirmap::{PathResolver, ResolverOptions};
use serde_json::json;
use std::path::{Path, PathBuf};

fn project_map() -> serde_json::Value {
    json!({
        "_": { "alias": "@app" },
        "entry": "index.js",
        "src": {
            "nav": {
                "menu": "menu.js",
                "even_more": { "deep": "deep.html" }
            },
            "public": {
                "_": { "alias": "#public" },
                "js": { "app": "app.js" }
            }
        },
        "dist": {
            "_": { "ignore": true },
            "css": {}
        },
        "scss": {
            "_": { "ignoreBranch": true },
            "partials": { "base": "_base.scss" }
        },
        "test": {
            "_": { "name": "spec" },
            "unit": {}
        }
    })
}

#[test]
fn nested_directories_get_scoped_resolvers() {
    let resolver =
        PathResolver::with_root("/proj", json!({ "src": { "nav": { "menu": "menu.js" } } }))
            .unwrap();

    assert_eq!(
        resolver.resolve("resolveSrc", ""),
        Some(PathBuf::from("/proj/src"))
    );
    assert_eq!(
        resolver.resolve("resolveSrcNav", ""),
        Some(PathBuf::from("/proj/src/nav"))
    );

    let menu = resolver.files().lookup(&["src", "nav", "menu"]).unwrap();
    assert_eq!(menu.path(), Path::new("/proj/src/nav/menu.js"));
    let nav = resolver.files().lookup(&["src", "nav"]).unwrap();
    assert_eq!(nav.path(), Path::new("/proj/src/nav"));
}

#[test]
fn root_alias_maps_to_root_path() {
    let resolver = PathResolver::with_root(
        "/proj",
        json!({ "_": { "alias": "@app" }, "src": { "index": "index.js" } }),
    )
    .unwrap();

    assert_eq!(resolver.get_alias_map().get("app"), Some(Path::new("/proj")));
    assert_eq!(
        resolver.resolve("resolveApp", "package.json"),
        Some(PathBuf::from("/proj/package.json"))
    );
}

#[test]
fn full_project_key_set() {
    let resolver = PathResolver::with_root("/proj", project_map()).unwrap();
    let keys: Vec<&str> = resolver.get_directory_resolver().keys().collect();
    assert_eq!(
        keys,
        vec![
            "resolveApp",
            "resolveSrc",
            "resolveSrcNav",
            "resolveSrcNavEvenMore",
            "resolvePublic",
            "resolvePublicJs",
            "resolveDistCss",
            "resolveSpec",
            "resolveSpecUnit",
        ]
    );

    let aliases: Vec<&str> = resolver.get_alias_map().iter().map(|(k, _)| k).collect();
    assert_eq!(aliases, vec!["app", "public"]);

    // renamed directories keep their physical path
    assert_eq!(
        resolver.resolve("resolveSpecUnit", "a.test.js"),
        Some(PathBuf::from("/proj/test/unit/a.test.js"))
    );
}

#[test]
fn ignored_branch_is_still_mirrored() {
    let resolver = PathResolver::with_root("/proj", project_map()).unwrap();
    let base = resolver
        .files()
        .lookup(&["scss", "partials", "base"])
        .unwrap();
    assert_eq!(base.path(), Path::new("/proj/scss/partials/_base.scss"));
    assert!(resolver
        .get_directory_resolver()
        .keys()
        .all(|key| !key.starts_with("resolveScss")));
}

#[test]
fn depth_zero_keeps_only_root_resolver() {
    let resolver = PathResolver::with_root_and_options(
        "/proj",
        json!({ "src": { "nav": {} } }),
        ResolverOptions::new().depth(0),
    )
    .unwrap();
    let keys: Vec<&str> = resolver.get_directory_resolver().keys().collect();
    assert_eq!(keys, vec!["resolve"]);
    assert!(resolver.files().lookup(&["src", "nav"]).is_some());
}

#[test]
fn custom_prefix_and_export_names() {
    let options = ResolverOptions::new()
        .resolver_prefix("dir")
        .namespace("dirs")
        .alias_root("shortcuts")
        .file_root("tree");
    let resolver = PathResolver::with_root_and_options("/proj", project_map(), options).unwrap();
    let exported = resolver.to_json().unwrap();

    assert_eq!(exported["dirs"]["dirSrcNav"], "/proj/src/nav");
    assert_eq!(exported["shortcuts"]["public"], "/proj/src/public");
    assert_eq!(exported["tree"]["entry"], "/proj/index.js");
    assert_eq!(exported["tree"]["src"]["_root"], "/proj/src");
}

#[test]
fn positional_arguments_match_typed_constructors() {
    let from_args = PathResolver::from_args(&[
        json!("/proj"),
        project_map(),
        json!({ "resolverPrefix": "get" }),
    ])
    .unwrap();
    let typed = PathResolver::with_root_and_options(
        "/proj",
        project_map(),
        ResolverOptions::new().resolver_prefix("get"),
    )
    .unwrap();

    assert_eq!(from_args.to_json().unwrap(), typed.to_json().unwrap());
}
