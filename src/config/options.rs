//! Resolver options and the validated, defaulted configuration built from them.

use crate::error::{ErrorPolicy, ResolverError};
use crate::paths;
use crate::tree::Directory;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

pub const DEFAULT_ALIAS_ROOT: &str = "aliases";
pub const DEFAULT_FILE_ROOT: &str = "files";
pub const DEFAULT_NAMESPACE: &str = "paths";
pub const DEFAULT_RESOLVER_PREFIX: &str = "resolve";

/// Caller-supplied options. Every field is optional and falls back to its default.
///
/// Lowercase aliases cover the layered loader, which folds key case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverOptions {
    /// Absolute base path; only used when no root path argument is given
    #[serde(default, alias = "rootpath", skip_serializing_if = "Option::is_none")]
    pub root_path: Option<String>,

    /// Directory map; only used when no map argument is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Value>,

    /// Name of the resolver table in exported output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Export resolver keys at the top level instead of under `namespace`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flatten: Option<bool>,

    /// Name of the alias table in exported output
    #[serde(default, alias = "aliasroot", skip_serializing_if = "Option::is_none")]
    pub alias_root: Option<String>,

    /// Name of the mirrored file tree in exported output
    #[serde(default, alias = "fileroot", skip_serializing_if = "Option::is_none")]
    pub file_root: Option<String>,

    /// Prefix of every generated resolver key
    #[serde(default, alias = "resolverprefix", skip_serializing_if = "Option::is_none")]
    pub resolver_prefix: Option<String>,

    /// Deepest level that gets resolvers; -1 for unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,

    /// Keep the scoped resolver when a directory also declares an alias
    #[serde(default, alias = "duplicatealiases", skip_serializing_if = "Option::is_none")]
    pub duplicate_aliases: Option<bool>,

    /// What to do with duplicate keys and malformed map entries
    #[serde(default, alias = "onerror", skip_serializing_if = "Option::is_none")]
    pub on_error: Option<ErrorPolicy>,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_path(mut self, root: impl Into<String>) -> Self {
        self.root_path = Some(root.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn flatten(mut self) -> Self {
        self.flatten = Some(true);
        self
    }

    pub fn alias_root(mut self, alias_root: impl Into<String>) -> Self {
        self.alias_root = Some(alias_root.into());
        self
    }

    pub fn file_root(mut self, file_root: impl Into<String>) -> Self {
        self.file_root = Some(file_root.into());
        self
    }

    pub fn resolver_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.resolver_prefix = Some(prefix.into());
        self
    }

    pub fn depth(mut self, depth: i64) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn duplicate_aliases(mut self, enabled: bool) -> Self {
        self.duplicate_aliases = Some(enabled);
        self
    }

    pub fn on_error(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = Some(policy);
        self
    }

    /// Read options from a loosely-typed object.
    ///
    /// Mistyped fields are dropped with a warning so they fall back to defaults.
    /// `namespace: false` requests a flattened export.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let mut options = ResolverOptions::new();
        for (field, value) in object {
            match field.as_str() {
                "rootPath" => options.root_path = loose_string(field, value),
                "paths" => options.paths = Some(value.clone()),
                "namespace" => match value {
                    Value::Bool(false) | Value::Null => options.flatten = Some(true),
                    _ => options.namespace = loose_string(field, value),
                },
                "flatten" => options.flatten = loose_bool(field, value),
                "aliasRoot" => options.alias_root = loose_string(field, value),
                "fileRoot" | "fileroot" => options.file_root = loose_string(field, value),
                "resolverPrefix" => options.resolver_prefix = loose_string(field, value),
                "depth" => {
                    options.depth = value.as_i64();
                    if options.depth.is_none() {
                        tracing::warn!(field = %field, "Ignoring non-integer option");
                    }
                }
                "duplicateAliases" => options.duplicate_aliases = loose_bool(field, value),
                "onError" => {
                    options.on_error = serde_json::from_value(value.clone()).ok();
                    if options.on_error.is_none() {
                        tracing::warn!(field = %field, "Ignoring option, expected 'fail' or 'report'");
                    }
                }
                other => tracing::debug!(field = %other, "Ignoring unknown option"),
            }
        }
        options
    }
}

fn loose_string(field: &str, value: &Value) -> Option<String> {
    let found = value.as_str().map(str::to_string);
    if found.is_none() {
        tracing::warn!(field = %field, "Ignoring non-string option");
    }
    found
}

fn loose_bool(field: &str, value: &Value) -> Option<bool> {
    let found = value.as_bool();
    if found.is_none() {
        tracing::warn!(field = %field, "Ignoring non-boolean option");
    }
    found
}

/// Empty or whitespace-only strings count as unset.
fn non_blank(field: &str, value: Option<String>) -> Option<String> {
    match value {
        Some(v) if v.trim().is_empty() => {
            tracing::warn!(field = %field, "Blank option, using default");
            None
        }
        other => other,
    }
}

/// Validated configuration for one resolver build.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub root_path: PathBuf,
    pub paths: Directory,
    /// `None` exports resolvers at the top level
    pub namespace: Option<String>,
    pub alias_root: String,
    pub file_root: String,
    pub resolver_prefix: String,
    /// `None` means unlimited
    pub depth: Option<usize>,
    pub duplicate_aliases: bool,
    pub on_error: ErrorPolicy,
}

impl Configuration {
    /// Merge `options` over the defaults.
    ///
    /// An explicit `root_path` or `paths` argument takes precedence over the
    /// same-named option field.
    pub fn build(
        root_path: Option<&str>,
        paths: Option<&Value>,
        options: ResolverOptions,
    ) -> Result<Self, ResolverError> {
        let ResolverOptions {
            root_path: option_root,
            paths: option_paths,
            namespace,
            flatten,
            alias_root,
            file_root,
            resolver_prefix,
            depth,
            duplicate_aliases,
            on_error,
        } = options;

        let root = non_blank("rootPath", root_path.map(str::to_string))
            .or_else(|| non_blank("rootPath", option_root));
        let root_path = match root {
            Some(root) => paths::absolutize(std::path::Path::new(&root))?,
            None => paths::default_root_path()?,
        };

        let on_error = on_error.unwrap_or_default();
        let paths = match paths.or(option_paths.as_ref()) {
            Some(value) => Directory::from_value(value, on_error)?,
            None => Directory::new(),
        };

        let namespace = if flatten.unwrap_or(false) {
            None
        } else {
            Some(
                non_blank("namespace", namespace)
                    .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            )
        };

        let depth = match depth {
            None | Some(-1) => None,
            Some(d) if d >= 0 => Some(d as usize),
            Some(d) => {
                tracing::warn!(depth = d, "Invalid depth, using unlimited");
                None
            }
        };

        Ok(Self {
            root_path,
            paths,
            namespace,
            alias_root: non_blank("aliasRoot", alias_root)
                .unwrap_or_else(|| DEFAULT_ALIAS_ROOT.to_string()),
            file_root: non_blank("fileRoot", file_root)
                .unwrap_or_else(|| DEFAULT_FILE_ROOT.to_string()),
            resolver_prefix: non_blank("resolverPrefix", resolver_prefix)
                .unwrap_or_else(|| DEFAULT_RESOLVER_PREFIX.to_string()),
            depth,
            duplicate_aliases: duplicate_aliases.unwrap_or(false),
            on_error,
        })
    }

    /// Defaults with an empty directory map.
    pub fn empty() -> Result<Self, ResolverError> {
        Self::build(None, None, ResolverOptions::default())
    }

    /// Whether a node at `depth_index` (root = 0) gets resolvers.
    pub fn allows_depth(&self, depth_index: usize) -> bool {
        self.depth.map_or(true, |max| depth_index <= max)
    }
}
