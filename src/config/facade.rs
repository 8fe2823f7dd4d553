//! OptionsLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::ResolverOptions;
use crate::error::ResolverError;
use std::path::Path;

/// Options loader facade.
pub struct OptionsLoader;

impl OptionsLoader {
    /// Load options from `DIRMAP_*` environment variables.
    pub fn load() -> Result<ResolverOptions, ResolverError> {
        Ok(MergeService::load()?)
    }

    /// Load options from a TOML, YAML or JSON file, overlaid with the environment.
    pub fn load_from_file(path: &Path) -> Result<ResolverOptions, ResolverError> {
        Ok(MergeService::load_from_file(path)?)
    }

    /// Default options.
    pub fn default() -> ResolverOptions {
        ResolverOptions::default()
    }
}
