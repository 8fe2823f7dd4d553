//! Options file source: format picked from the file extension.
//!
//! The environment layer arrives with lowercased keys, so top-level file keys
//! are lowercased too; otherwise `resolverPrefix` and `resolverprefix` would
//! sit side by side and the file value would shadow the environment.

use crate::config::map_file::parse_by_extension;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::{File, FileFormat};
use serde_json::{Map, Value};
use std::path::Path;

/// Add a required options file to builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Message(format!("{}: {}", path.display(), e)))?;
    let value = parse_by_extension(path, &content)
        .map_err(|e| ConfigError::Message(format!("{}: {}", path.display(), e)))?;
    let Value::Object(object) = value else {
        return Err(ConfigError::Message(format!(
            "{}: options file must contain an object at the top level",
            path.display()
        )));
    };

    let normalized = lowercase_keys(object);
    let json = serde_json::to_string(&Value::Object(normalized))
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    Ok(builder.add_source(File::from_str(&json, FileFormat::Json)))
}

fn lowercase_keys(object: Map<String, Value>) -> Map<String, Value> {
    object
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect()
}
