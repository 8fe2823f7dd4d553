//! Directory map walker.
//!
//! Descends the parsed map once, registering a resolver (and optionally an
//! alias) for every directory and building the mirrored file tree alongside.
//!
//! Per directory:
//! - the resolver key is `format_resolver_key(name ?? key, scope)`
//! - the scope handed to children is `scope-(name ?? key)`, or the kebab-cased
//!   alias when the directory declares one
//! - `ignore` skips this directory's resolver and alias only
//! - `ignoreBranch` skips resolvers for the whole subtree, which is still mirrored
//! - directories deeper than `depth` are mirrored without resolvers
//!
//! The root sits at depth 0, top-level directories at depth 1.

use crate::case::to_kebab_case;
use crate::config::Configuration;
use crate::error::{ResolverError, TableKind};
use crate::paths::resolve_path;
use crate::registry::{format_resolver_key, AliasMap, ResolverTable};
use crate::tree::{Directory, DirectoryNode, MirroredDirectory, MirroredNode, NodeConfig};
use std::path::{Path, PathBuf};

/// Everything a walk produces.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkOutput {
    pub resolvers: ResolverTable,
    pub aliases: AliasMap,
    pub files: MirroredDirectory,
}

/// Walk `config.paths` from the root.
pub fn walk(config: &Configuration) -> Result<WalkOutput, ResolverError> {
    let mut walker = Walker {
        config,
        resolvers: ResolverTable::new(),
        aliases: AliasMap::new(),
    };

    let root = &config.paths;
    walker.handle_root(root)?;
    let files = walker.walk_level(root, Path::new(""), None, 1, root.config.ignore_branch)?;

    tracing::debug!(
        root = %config.root_path.display(),
        resolvers = walker.resolvers.len(),
        aliases = walker.aliases.len(),
        "Directory map walked"
    );

    Ok(WalkOutput {
        resolvers: walker.resolvers,
        aliases: walker.aliases,
        files,
    })
}

/// Strip leading `@` / `#` sigils. Returns `None` when nothing is left.
pub fn alias_key(alias: &str) -> Option<&str> {
    let key = alias.trim_start_matches(|c: char| c == '@' || c == '#');
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

struct Walker<'a> {
    config: &'a Configuration,
    resolvers: ResolverTable,
    aliases: AliasMap,
}

impl<'a> Walker<'a> {
    fn handle_root(&mut self, root: &Directory) -> Result<(), ResolverError> {
        let node = &root.config;
        if node.ignore_branch || node.ignore || !self.config.allows_depth(0) {
            return Ok(());
        }
        let name = node.name.as_deref().unwrap_or("");
        let root_path = self.config.root_path.clone();
        let alias_used = self.handle_alias(node, &root_path)?;
        if self.config.duplicate_aliases || !alias_used {
            let key = format_resolver_key(&self.config.resolver_prefix, name, None);
            self.add_resolver(&key, &root_path)?;
        }
        Ok(())
    }

    fn walk_level(
        &mut self,
        directory: &Directory,
        parent: &Path,
        scope: Option<&str>,
        depth_index: usize,
        pruned: bool,
    ) -> Result<MirroredDirectory, ResolverError> {
        let mut mirrored = MirroredDirectory::new(self.absolute(parent, ""));

        for (key, child) in &directory.children {
            match child {
                DirectoryNode::File(file) => {
                    let path = self.absolute(parent, file);
                    mirrored.children.insert(key.clone(), MirroredNode::File(path));
                }
                DirectoryNode::Directory(sub) => {
                    let local = parent.join(key);
                    let absolute = self.absolute(&local, "");
                    let node = &sub.config;
                    let effective = node.name.as_deref().unwrap_or(key);
                    let branch_pruned = pruned || node.ignore_branch;
                    let registers =
                        !branch_pruned && !node.ignore && self.config.allows_depth(depth_index);

                    let alias_used = if registers {
                        self.handle_alias(node, &absolute)?
                    } else {
                        false
                    };

                    if registers && (self.config.duplicate_aliases || !alias_used) {
                        let resolver_key =
                            format_resolver_key(&self.config.resolver_prefix, effective, scope);
                        self.add_resolver(&resolver_key, &absolute)?;
                    }

                    let next_scope = match node.alias.as_deref().and_then(alias_key) {
                        Some(alias) => to_kebab_case(alias),
                        None => match scope {
                            Some(scope) => format!("{}-{}", scope, effective),
                            None => effective.to_string(),
                        },
                    };

                    let sub_tree = self.walk_level(
                        sub,
                        &local,
                        Some(next_scope.as_str()),
                        depth_index + 1,
                        branch_pruned,
                    )?;
                    mirrored
                        .children
                        .insert(key.clone(), MirroredNode::Directory(sub_tree));
                }
            }
        }
        Ok(mirrored)
    }

    /// Register the alias entry and its unscoped resolver.
    ///
    /// Returns whether the alias took effect; a rejected alias falls back to
    /// the directory's scoped resolver.
    fn handle_alias(&mut self, node: &NodeConfig, path: &Path) -> Result<bool, ResolverError> {
        let Some(alias) = node.alias.as_deref() else {
            return Ok(false);
        };
        let Some(key) = alias_key(alias) else {
            tracing::warn!(alias = %alias, "Alias has no name after its sigil, ignoring");
            return Ok(false);
        };

        // Both entries go in together or neither does.
        let resolver_key = format_resolver_key(&self.config.resolver_prefix, key, None);
        let collision = if self.aliases.contains_key(key) {
            Some(ResolverError::DuplicateKey {
                table: TableKind::Aliases,
                key: key.to_string(),
            })
        } else if self.resolvers.contains_key(&resolver_key) {
            Some(ResolverError::DuplicateKey {
                table: TableKind::Resolvers,
                key: resolver_key.clone(),
            })
        } else {
            None
        };
        if let Some(e) = collision {
            self.config.on_error.handle(e)?;
            return Ok(false);
        }

        self.aliases.register(key, path)?;
        self.resolvers.register(&resolver_key, path)?;
        Ok(true)
    }

    fn add_resolver(&mut self, key: &str, path: &Path) -> Result<(), ResolverError> {
        match self.resolvers.register(key, path) {
            Ok(()) => Ok(()),
            Err(e) => self.config.on_error.handle(e),
        }
    }

    fn absolute(&self, relative: &Path, file: &str) -> PathBuf {
        resolve_path(&self.config.root_path, [relative, Path::new(file)])
    }
}
