//! Property tests over generated directory maps.

use dirmap::{MirroredNode, PathResolver, ResolverOptions};
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Lowercase directory names, unique per level, that cannot collide once
/// joined into resolver keys.
fn dir_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn file_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.(js|css|html)"
}

fn directory_map() -> impl Strategy<Value = Value> {
    let leaf = prop::collection::btree_map(dir_name(), file_name(), 0..4)
        .prop_map(|files| Value::Object(files.into_iter().map(|(k, v)| (k, Value::String(v))).collect()));
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map(dir_name(), inner, 1..4)
            .prop_map(|dirs| Value::Object(dirs.into_iter().collect::<Map<String, Value>>()))
    })
}

/// Expected absolute directories and files, walked the simple way.
fn expected_paths(
    value: &Value,
    dir: &Path,
    dirs: &mut Vec<PathBuf>,
    files: &mut Vec<(Vec<String>, PathBuf)>,
    keys: &mut Vec<String>,
) {
    if let Value::Object(object) = value {
        for (key, child) in object {
            keys.push(key.clone());
            match child {
                Value::String(file) => files.push((keys.clone(), dir.join(file))),
                _ => {
                    let sub = dir.join(key);
                    dirs.push(sub.clone());
                    expected_paths(child, &sub, dirs, files, keys);
                }
            }
            keys.pop();
        }
    }
}

/// Generated maps can still collide (`a/bc` vs `ab/c`), so construction is
/// lenient and assertions only cover what was registered.
fn build(map: Value) -> PathResolver {
    PathResolver::with_root_and_options(
        "/proj",
        map,
        ResolverOptions::new().on_error(dirmap::ErrorPolicy::Report),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn resolvers_join_against_their_directory(map in directory_map(), rel in "[a-z]{1,6}(/[a-z]{1,6})?") {
        let resolver = build(map.clone());
        let mut dirs = vec![PathBuf::from("/proj")];
        let (mut files, mut keys) = (Vec::new(), Vec::new());
        expected_paths(&map, Path::new("/proj"), &mut dirs, &mut files, &mut keys);
        let known: HashSet<PathBuf> = dirs.into_iter().collect();

        for (_, r) in resolver.get_directory_resolver().iter() {
            prop_assert!(known.contains(r.base()));
            prop_assert_eq!(r.resolve(""), r.base().to_path_buf());
            prop_assert_eq!(r.resolve(&rel), r.base().join(&rel));
            // pure: same input, same output
            prop_assert_eq!(r.resolve(&rel), r.resolve(&rel));
        }
    }

    #[test]
    fn mirrored_tree_matches_input(map in directory_map()) {
        let resolver = build(map.clone());
        let mut dirs = Vec::new();
        let (mut files, mut keys) = (Vec::new(), Vec::new());
        expected_paths(&map, Path::new("/proj"), &mut dirs, &mut files, &mut keys);

        for (chain, path) in &files {
            let chain: Vec<&str> = chain.iter().map(String::as_str).collect();
            match resolver.files().lookup(&chain) {
                Some(MirroredNode::File(found)) => prop_assert_eq!(found, path),
                other => prop_assert!(false, "missing file {:?}: {:?}", chain, other),
            }
        }
        let exported = resolver.to_json().unwrap();
        prop_assert_eq!(&exported["files"]["_root"], "/proj");
    }

    #[test]
    fn every_directory_is_mirrored_with_root(map in directory_map()) {
        let resolver = build(map.clone());
        let mut dirs = Vec::new();
        let (mut files, mut keys) = (Vec::new(), Vec::new());
        expected_paths(&map, Path::new("/proj"), &mut dirs, &mut files, &mut keys);

        let mut mirrored = Vec::new();
        collect_dirs(resolver.files().children.values(), &mut mirrored);
        prop_assert_eq!(mirrored, dirs);
    }

    #[test]
    fn resolver_keys_are_camel_case(map in directory_map()) {
        let resolver = build(map);
        for key in resolver.get_directory_resolver().keys() {
            prop_assert!(key.starts_with("resolve"));
            prop_assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}

fn collect_dirs<'a>(nodes: impl Iterator<Item = &'a MirroredNode>, out: &mut Vec<PathBuf>) {
    for node in nodes {
        if let MirroredNode::Directory(dir) = node {
            out.push(dir.root.clone());
            collect_dirs(dir.children.values(), out);
        }
    }
}
