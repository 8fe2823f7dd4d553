//! MergeService: orchestrates sources and deserializes to ResolverOptions.

use crate::config::sources::{environment, options_file};
use crate::config::ResolverOptions;
use config::{Config, ConfigError, Map};
use std::path::Path;

/// Merge service for option composition.
pub struct MergeService;

impl MergeService {
    /// Load options from environment only.
    pub fn load() -> Result<ResolverOptions, ConfigError> {
        Self::load_layers(None, None)
    }

    /// Load options from a specific file with environment overlay.
    /// Precedence: options file (lowest) -> environment (highest).
    pub fn load_from_file(path: &Path) -> Result<ResolverOptions, ConfigError> {
        Self::load_layers(Some(path), None)
    }

    /// `vars` replaces the process environment when given.
    pub(crate) fn load_layers(
        path: Option<&Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<ResolverOptions, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = options_file::add_to_builder(builder, path)?;
        }
        let builder = environment::add_to_builder(builder, vars)?;
        builder.build()?.try_deserialize()
    }
}
