//! Resolver and alias tables.
//!
//! Both tables keep insertion order and refuse to overwrite an existing key.

use crate::case::{to_camel_case, to_snake_case};
use crate::error::{ResolverError, TableKind};
use crate::paths::resolve_path;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Build a resolver key: `camelCase(prefix + "-" + snake_case(scope-name))`.
///
/// Path separators inside `name` count as word breaks, so `nav/test` under
/// prefix `resolve` becomes `resolveNavTest`.
pub fn format_resolver_key(prefix: &str, name: &str, scope: Option<&str>) -> String {
    let scoped = match scope {
        Some(scope) if !scope.is_empty() && !name.is_empty() => format!("{}-{}", scope, name),
        _ => name.to_string(),
    };
    let dashed = scoped.replace(|c: char| c == '/' || c == '\\', "-");
    to_camel_case(&format!("{}-{}", prefix, to_snake_case(&dashed)))
}

/// Returns a closure resolving relative paths against `base`.
pub fn make_relative_resolver(base: impl Into<PathBuf>) -> impl Fn(&str) -> PathBuf {
    let base = base.into();
    move |relative: &str| resolve_path(&base, [relative])
}

/// A resolver bound to one absolute directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    base: PathBuf,
}

impl Resolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The directory itself, same as `resolve("")`.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Join `relative` onto the base directory.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        resolve_path(&self.base, [relative])
    }
}

/// Resolver key -> resolver, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolverTable {
    resolvers: IndexMap<String, Resolver>,
}

impl ResolverTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver for `path` under `key`.
    pub fn register(&mut self, key: &str, path: &Path) -> Result<(), ResolverError> {
        if self.resolvers.contains_key(key) {
            return Err(ResolverError::DuplicateKey {
                table: TableKind::Resolvers,
                key: key.to_string(),
            });
        }
        tracing::debug!(key = %key, path = %path.display(), "Registered resolver");
        self.resolvers
            .insert(key.to_string(), Resolver::new(path.to_path_buf()));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Resolver> {
        self.resolvers.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.resolvers.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resolver)> {
        self.resolvers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

/// Alias name (sigil stripped) -> absolute path, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasMap {
    aliases: IndexMap<String, PathBuf>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, alias: &str, path: &Path) -> Result<(), ResolverError> {
        if self.aliases.contains_key(alias) {
            return Err(ResolverError::DuplicateKey {
                table: TableKind::Aliases,
                key: alias.to_string(),
            });
        }
        tracing::debug!(alias = %alias, path = %path.display(), "Registered alias");
        self.aliases.insert(alias.to_string(), path.to_path_buf());
        Ok(())
    }

    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.aliases.get(alias).map(PathBuf::as_path)
    }

    pub fn contains_key(&self, alias: &str) -> bool {
        self.aliases.contains_key(alias)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.aliases
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_path()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
