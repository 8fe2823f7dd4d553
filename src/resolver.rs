//! `PathResolver`: the public face of the crate.
//!
//! Construction normalizes arguments, walks the directory map once and keeps
//! the three output tables: directory resolvers, aliases and the mirrored
//! file tree. Nothing is mutated afterwards except by [`PathResolver::initialize`],
//! which replaces every table.

use crate::config::{normalize_args, Configuration, ResolverOptions};
use crate::error::ResolverError;
use crate::registry::{AliasMap, Resolver, ResolverTable};
use crate::tree::MirroredDirectory;
use crate::walker::{walk, WalkOutput};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PathResolver {
    config: Configuration,
    resolvers: ResolverTable,
    aliases: AliasMap,
    files: MirroredDirectory,
    initialized: bool,
}

impl PathResolver {
    /// Build from a directory map rooted at the working directory.
    pub fn new(map: Value) -> Result<Self, ResolverError> {
        Self::from_args(&[map])
    }

    /// Build from a directory map and options.
    pub fn with_options(map: Value, options: ResolverOptions) -> Result<Self, ResolverError> {
        Self::from_configuration(Configuration::build(None, Some(&map), options)?)
    }

    /// Build from an explicit root path and a directory map.
    pub fn with_root(root: &str, map: Value) -> Result<Self, ResolverError> {
        Self::with_root_and_options(root, map, ResolverOptions::new())
    }

    pub fn with_root_and_options(
        root: &str,
        map: Value,
        options: ResolverOptions,
    ) -> Result<Self, ResolverError> {
        Self::from_configuration(Configuration::build(Some(root), Some(&map), options)?)
    }

    /// Build from 0-3 loosely-typed positional arguments.
    ///
    /// With no arguments the resolver stays unconfigured until
    /// [`initialize`](Self::initialize) is called.
    pub fn from_args(args: &[Value]) -> Result<Self, ResolverError> {
        let config = normalize_args(args)?;
        if args.is_empty() {
            return Ok(Self::unconfigured(config));
        }
        Self::from_configuration(config)
    }

    pub fn from_configuration(config: Configuration) -> Result<Self, ResolverError> {
        let WalkOutput {
            resolvers,
            aliases,
            files,
        } = walk(&config)?;
        tracing::info!(
            root = %config.root_path.display(),
            resolvers = resolvers.len(),
            aliases = aliases.len(),
            "Path resolver initialized"
        );
        Ok(Self {
            config,
            resolvers,
            aliases,
            files,
            initialized: true,
        })
    }

    fn unconfigured(config: Configuration) -> Self {
        let files = MirroredDirectory::new(config.root_path.clone());
        Self {
            config,
            resolvers: ResolverTable::new(),
            aliases: AliasMap::new(),
            files,
            initialized: false,
        }
    }

    /// Rebuild every table from new arguments.
    ///
    /// On error the previous state is kept.
    pub fn initialize(&mut self, args: &[Value]) -> Result<(), ResolverError> {
        if self.initialized {
            tracing::debug!("Re-initializing path resolver, previous tables are discarded");
        }
        *self = Self::from_args(args)?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn root_path(&self) -> &Path {
        &self.config.root_path
    }

    /// The directory resolver table (exported under `namespace`).
    pub fn get_directory_resolver(&self) -> &ResolverTable {
        &self.resolvers
    }

    /// The alias table (exported under `aliasRoot`).
    pub fn get_alias_map(&self) -> &AliasMap {
        &self.aliases
    }

    /// The mirrored file tree (exported under `fileRoot`).
    pub fn files(&self) -> &MirroredDirectory {
        &self.files
    }

    pub fn resolver(&self, key: &str) -> Option<&Resolver> {
        self.resolvers.get(key)
    }

    /// Resolve `relative` with the resolver registered under `key`.
    pub fn resolve(&self, key: &str, relative: &str) -> Option<PathBuf> {
        self.resolvers.get(key).map(|r| r.resolve(relative))
    }

    /// Export all tables as JSON, using the configured table names.
    ///
    /// Resolvers are exported as their base directory.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Serialize for PathResolver {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let config = &self.config;

        match &config.namespace {
            Some(namespace) => {
                let table: Map<String, Value> = self
                    .resolvers
                    .iter()
                    .map(|(key, r)| (key.to_string(), Value::String(path_string(r.base()))))
                    .collect();
                map.serialize_entry(namespace, &table)?;
            }
            None => {
                for (key, resolver) in self.resolvers.iter() {
                    if key == config.alias_root || key == config.file_root {
                        tracing::warn!(key = %key, "Flattened resolver shadows a table name, skipping it in export");
                        continue;
                    }
                    map.serialize_entry(key, &path_string(resolver.base()))?;
                }
            }
        }

        let aliases: Map<String, Value> = self
            .aliases
            .iter()
            .map(|(alias, path)| (alias.to_string(), Value::String(path_string(path))))
            .collect();
        map.serialize_entry(&config.alias_root, &aliases)?;
        map.serialize_entry(&config.file_root, &self.files)?;
        map.end()
    }
}
