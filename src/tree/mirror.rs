//! Mirrored output tree: the input map with absolute paths at every node.

use super::node::ROOT_KEY;
use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A node of the mirrored tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MirroredNode {
    File(PathBuf),
    Directory(MirroredDirectory),
}

/// A mirrored directory, carrying its own absolute path as `_root`.
#[derive(Debug, Clone, PartialEq)]
pub struct MirroredDirectory {
    pub root: PathBuf,
    pub children: IndexMap<String, MirroredNode>,
}

impl MirroredNode {
    /// Absolute path of the file, or the directory's `_root`.
    pub fn path(&self) -> &Path {
        match self {
            MirroredNode::File(path) => path,
            MirroredNode::Directory(dir) => &dir.root,
        }
    }

    pub fn as_directory(&self) -> Option<&MirroredDirectory> {
        match self {
            MirroredNode::Directory(dir) => Some(dir),
            MirroredNode::File(_) => None,
        }
    }
}

impl MirroredDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            children: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MirroredNode> {
        self.children.get(key)
    }

    /// Follow a chain of keys from this directory.
    ///
    /// `lookup(&["src", "nav", "menu"])` returns the `menu` entry under `src/nav`.
    pub fn lookup(&self, keys: &[&str]) -> Option<&MirroredNode> {
        let (first, rest) = keys.split_first()?;
        let node = self.children.get(*first)?;
        if rest.is_empty() {
            return Some(node);
        }
        node.as_directory()?.lookup(rest)
    }

    /// Every file path in the tree, depth first in declaration order.
    pub fn files(&self) -> Vec<&Path> {
        let mut out = Vec::new();
        collect_files(self, &mut out);
        out
    }
}

fn collect_files<'a>(dir: &'a MirroredDirectory, out: &mut Vec<&'a Path>) {
    for child in dir.children.values() {
        match child {
            MirroredNode::File(path) => out.push(path),
            MirroredNode::Directory(sub) => collect_files(sub, out),
        }
    }
}

impl Serialize for MirroredNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MirroredNode::File(path) => serializer.serialize_str(&path.to_string_lossy()),
            MirroredNode::Directory(dir) => dir.serialize(serializer),
        }
    }
}

impl Serialize for MirroredDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len() + 1))?;
        for (key, child) in &self.children {
            map.serialize_entry(key, child)?;
        }
        map.serialize_entry(ROOT_KEY, &self.root.to_string_lossy())?;
        map.end()
    }
}
