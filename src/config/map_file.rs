//! Directory map files.
//!
//! Maps are read straight through serde rather than through the layered
//! options loader so that key case and declaration order survive.

use crate::error::ResolverError;
use serde_json::Value;
use std::path::Path;

/// Read a directory map from a `.json`, `.yaml`/`.yml` or `.toml` file.
pub fn load_directory_map(path: &Path) -> Result<Value, ResolverError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ResolverError::ConfigError(format!(
            "Failed to read directory map {}: {}",
            path.display(),
            e
        ))
    })?;

    let value = parse_by_extension(path, &content).map_err(|e| {
        ResolverError::ConfigError(format!(
            "Failed to parse directory map {}: {}",
            path.display(),
            e
        ))
    })?;

    if !value.is_object() {
        return Err(ResolverError::ConfigError(format!(
            "Directory map {} must contain an object at the top level",
            path.display()
        )));
    }
    Ok(value)
}

/// Parse `content` with the format named by the extension of `path`.
pub(crate) fn parse_by_extension(path: &Path, content: &str) -> Result<Value, String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => serde_json::from_str(content).map_err(|e| e.to_string()),
        "yaml" | "yml" => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        "toml" => toml::from_str(content).map_err(|e| e.to_string()),
        other => Err(format!(
            "unsupported format '{}' (expected json, yaml or toml)",
            other
        )),
    }
}
