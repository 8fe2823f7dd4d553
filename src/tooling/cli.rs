//! CLI Tooling
//!
//! Command-line interface over [`PathResolver`]: build resolvers from a map
//! file and print them, resolve one path, or dump the alias and file tables.

use crate::config::{load_directory_map, OptionsLoader, ResolverOptions};
use crate::error::{ErrorPolicy, ResolverError};
use crate::format::{format_report, format_section_heading};
use crate::logging::LoggingConfig;
use crate::resolver::PathResolver;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dirmap CLI - path resolvers from a declarative directory map
#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Generate path resolvers and aliases from a declarative directory map")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base directory the map is resolved against (default: current directory)
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Options file (toml, yaml or json); DIRMAP_* environment variables apply on top
    #[arg(long, global = true)]
    pub options: Option<PathBuf>,

    /// Deepest level that gets resolvers (-1 for unlimited)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Keep scoped resolvers for aliased directories
    #[arg(long, global = true)]
    pub duplicate_aliases: bool,

    /// Report duplicate keys and malformed entries instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every resolver and alias built from a map
    Show {
        /// Directory map file (json, yaml, yml or toml)
        map: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Resolve a path with one resolver
    Resolve {
        /// Directory map file
        map: PathBuf,
        /// Resolver key, e.g. resolveSrcNav
        key: String,
        /// Path relative to the resolver's directory
        relative: Option<String>,
    },
    /// List aliases
    Aliases {
        /// Directory map file
        map: PathBuf,
    },
    /// Print the mirrored file tree as JSON
    Files {
        /// Directory map file
        map: PathBuf,
    },
}

impl Cli {
    /// Logging settings derived from the log flags.
    pub fn logging_config(&self) -> Result<LoggingConfig, ResolverError> {
        let mut config = LoggingConfig::default();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.parse()?;
        }
        if let Some(output) = &self.log_output {
            config.output = output.parse()?;
        }
        Ok(config)
    }
}

/// Options shared by every command, with flags applied over loaded options.
pub struct CliContext {
    root: Option<String>,
    options: ResolverOptions,
}

impl CliContext {
    pub fn new(cli: &Cli) -> Result<Self, ResolverError> {
        let mut options = match &cli.options {
            Some(path) => OptionsLoader::load_from_file(path)?,
            None => OptionsLoader::load()?,
        };
        if let Some(depth) = cli.depth {
            options.depth = Some(depth);
        }
        if cli.duplicate_aliases {
            options.duplicate_aliases = Some(true);
        }
        if cli.lenient {
            options.on_error = Some(ErrorPolicy::Report);
        }
        Ok(Self {
            root: cli.root.clone(),
            options,
        })
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    fn build(&self, map: &Path) -> Result<PathResolver, ResolverError> {
        let directory_map = load_directory_map(map)?;
        info!(map = %map.display(), "Building resolvers");
        match &self.root {
            Some(root) => {
                PathResolver::with_root_and_options(root, directory_map, self.options.clone())
            }
            None => PathResolver::with_options(directory_map, self.options.clone()),
        }
    }

    /// Run a command and return its output.
    pub fn execute(&self, command: &Commands) -> Result<String, ResolverError> {
        match command {
            Commands::Show { map, format } => self.handle_show(map, format),
            Commands::Resolve { map, key, relative } => {
                self.handle_resolve(map, key, relative.as_deref().unwrap_or(""))
            }
            Commands::Aliases { map } => self.handle_aliases(map),
            Commands::Files { map } => self.handle_files(map),
        }
    }

    fn handle_show(&self, map: &Path, format: &str) -> Result<String, ResolverError> {
        let resolver = self.build(map)?;
        match format {
            "json" => Ok(serde_json::to_string_pretty(&resolver.to_json()?)?),
            "text" => Ok(format_report(&resolver, true)),
            other => Err(ResolverError::InvalidArguments(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn handle_resolve(
        &self,
        map: &Path,
        key: &str,
        relative: &str,
    ) -> Result<String, ResolverError> {
        let resolver = self.build(map)?;
        resolver
            .resolve(key, relative)
            .map(|path| path.display().to_string())
            .ok_or_else(|| ResolverError::UnknownResolver(key.to_string()))
    }

    fn handle_aliases(&self, map: &Path) -> Result<String, ResolverError> {
        let resolver = self.build(map)?;
        let aliases = resolver.get_alias_map();
        if aliases.is_empty() {
            return Ok("No aliases declared".to_string());
        }
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Alias", "Path"]);
        for (alias, path) in aliases.iter() {
            table.add_row(vec![alias.to_string(), path.display().to_string()]);
        }
        Ok(format!("{}\n{}", format_section_heading("Aliases"), table))
    }

    fn handle_files(&self, map: &Path) -> Result<String, ResolverError> {
        let resolver = self.build(map)?;
        Ok(serde_json::to_string_pretty(resolver.files())?)
    }
}
