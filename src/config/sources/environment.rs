//! Environment variable source: DIRMAP_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::Map;

pub const ENV_PREFIX: &str = "DIRMAP";

/// Add environment variable overlay to builder.
/// `DIRMAP_DEPTH=2` sets `depth`, `DIRMAP_RESOLVERPREFIX=get` sets `resolverPrefix`.
///
/// `vars` stands in for the process environment when set.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<Map<String, String>>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
            .source(vars),
    );
    Ok(builder)
}
