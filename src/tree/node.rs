//! Directory map node types, parsed once from a loosely-typed JSON value.

use crate::error::{ErrorPolicy, ResolverError};
use crate::paths::is_file_uri;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved key holding a directory's [`NodeConfig`].
pub const CONFIG_KEY: &str = "_";

/// Synthetic key holding a directory's absolute path in the mirrored tree.
pub const ROOT_KEY: &str = "_root";

/// Per-directory metadata, read from the `_` entry of a directory object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    /// Rename this directory's resolver key and its scope for descendants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Globally addressable alias, usually prefixed with `@` or `#`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Skip this directory's resolver and alias; children still get theirs
    #[serde(default)]
    pub ignore: bool,

    /// Skip resolvers for this directory and every descendant
    #[serde(default)]
    pub ignore_branch: bool,
}

impl NodeConfig {
    fn from_value(value: &Value, path: &str) -> Result<Self, ResolverError> {
        if !value.is_object() {
            return Err(ResolverError::malformed(
                path,
                format!("'{}' must be a config object", CONFIG_KEY),
            ));
        }
        let mut config: NodeConfig = serde_json::from_value(value.clone())
            .map_err(|e| ResolverError::malformed(path, format!("invalid config: {}", e)))?;
        // blank names behave as if unset
        config.name = config.name.filter(|n| !n.trim().is_empty());
        config.alias = config.alias.filter(|a| !a.trim().is_empty());
        Ok(config)
    }
}

/// A node of the directory map.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryNode {
    /// A file name (or relative file path) inside the parent directory
    File(String),
    /// A nested directory
    Directory(Directory),
}

/// A directory: its optional config plus its children in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub config: NodeConfig,
    pub children: IndexMap<String, DirectoryNode>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: NodeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_file(mut self, key: impl Into<String>, file: impl Into<String>) -> Self {
        self.children
            .insert(key.into(), DirectoryNode::File(file.into()));
        self
    }

    pub fn with_dir(mut self, key: impl Into<String>, dir: Directory) -> Self {
        self.children
            .insert(key.into(), DirectoryNode::Directory(dir));
        self
    }

    /// Parse a directory map from a JSON object.
    ///
    /// Entries that are neither file names nor directory objects are malformed;
    /// `policy` decides whether that aborts parsing or drops the entry.
    pub fn from_value(value: &Value, policy: ErrorPolicy) -> Result<Self, ResolverError> {
        parse_directory(value, "", policy)
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}/{}", parent, key)
    }
}

fn parse_directory(value: &Value, path: &str, policy: ErrorPolicy) -> Result<Directory, ResolverError> {
    let object = value.as_object().ok_or_else(|| {
        ResolverError::malformed(display_path(path), "directory must be an object")
    })?;

    let mut directory = Directory::new();
    for (key, child) in object {
        if key == CONFIG_KEY {
            match NodeConfig::from_value(child, &display_path(path)) {
                Ok(config) => directory.config = config,
                Err(e) => policy.handle(e)?,
            }
            continue;
        }

        let entry_path = child_path(path, key);
        if key == ROOT_KEY {
            policy.handle(ResolverError::malformed(
                entry_path,
                format!("'{}' is reserved for the mirrored tree", ROOT_KEY),
            ))?;
            continue;
        }

        match parse_node(child, &entry_path, policy) {
            Ok(Some(node)) => {
                directory.children.insert(key.clone(), node);
            }
            Ok(None) => {}
            Err(e) => policy.handle(e)?,
        }
    }
    Ok(directory)
}

fn parse_node(
    value: &Value,
    path: &str,
    policy: ErrorPolicy,
) -> Result<Option<DirectoryNode>, ResolverError> {
    match value {
        Value::String(file) if is_file_uri(file) => Ok(Some(DirectoryNode::File(file.clone()))),
        Value::String(other) => Err(ResolverError::malformed(
            path,
            format!("'{}' does not look like a file name", other),
        )),
        Value::Object(_) => {
            parse_directory(value, path, policy).map(|d| Some(DirectoryNode::Directory(d)))
        }
        other => Err(ResolverError::malformed(
            path,
            format!("expected a file name or directory object, found {}", kind_of(other)),
        )),
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
