//! Logging System
//!
//! Structured logging via `tracing`. The library only emits events; binaries
//! call [`init_logging`] to install a subscriber.
//!
//! Environment variables take priority over the passed [`LoggingConfig`]:
//! `DIRMAP_LOG` (full filter), `DIRMAP_LOG_FORMAT`, `DIRMAP_LOG_OUTPUT` and
//! `DIRMAP_LOG_MODULES` (`module=level,...`).

use crate::error::ResolverError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Event encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ResolverError::ConfigError(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            ))),
        }
    }
}

/// Where events are written. Command output owns stdout, so stderr is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    Stdout,
    #[default]
    Stderr,
    Both,
}

impl FromStr for LogOutput {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(LogOutput::Stdout),
            "stderr" => Ok(LogOutput::Stderr),
            "both" => Ok(LogOutput::Both),
            other => Err(ResolverError::ConfigError(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr' or 'both')",
                other
            ))),
        }
    }
}

impl LogOutput {
    fn make_writer(self) -> BoxMakeWriter {
        match self {
            LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
            LogOutput::Both => BoxMakeWriter::new(std::io::stdout.and(std::io::stderr)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Install a subscriber at all
    pub enabled: bool,

    /// trace, debug, info, warn, error or off
    pub level: String,

    pub format: LogFormat,

    pub output: LogOutput,

    /// ANSI colors (text format only)
    pub color: bool,

    /// Per-module levels, e.g. `dirmap::walker = "trace"`
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "warn".to_string(),
            format: LogFormat::default(),
            output: LogOutput::default(),
            color: true,
            modules: BTreeMap::new(),
        }
    }
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed or a setting is invalid.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ResolverError> {
    let defaults = LoggingConfig::default();
    let config = config.unwrap_or(&defaults);

    let installed = if !config.enabled {
        Registry::default()
            .with(EnvFilter::new("off"))
            .with(fmt::layer().with_writer(std::io::sink))
            .try_init()
    } else {
        let filter = build_env_filter(config)?;
        let format = env_override("DIRMAP_LOG_FORMAT")?.unwrap_or(config.format);
        let writer = env_override("DIRMAP_LOG_OUTPUT")?
            .unwrap_or(config.output)
            .make_writer();

        let subscriber = Registry::default().with(filter);
        match format {
            LogFormat::Json => subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(writer),
                )
                .try_init(),
            LogFormat::Text => subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(config.color)
                        .with_writer(writer),
                )
                .try_init(),
        }
    };

    installed.map_err(|e| ResolverError::ConfigError(format!("Failed to install logger: {}", e)))
}

/// Parse an environment override; unset or empty means no override.
fn env_override<T: FromStr<Err = ResolverError>>(var: &str) -> Result<Option<T>, ResolverError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => value.trim().parse().map(Some),
        _ => Ok(None),
    }
}

/// `DIRMAP_LOG` replaces the whole filter; otherwise level + module directives.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ResolverError> {
    if let Ok(filter) = EnvFilter::try_from_env("DIRMAP_LOG") {
        return Ok(filter);
    }
    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);
    for (module, level) in &config.modules {
        filter = filter.add_directive(directive(module, level)?);
    }

    if let Ok(modules) = std::env::var("DIRMAP_LOG_MODULES") {
        for (module, level) in modules.split(',').filter_map(|spec| spec.split_once('=')) {
            filter = filter.add_directive(directive(module.trim(), level.trim())?);
        }
    }
    Ok(filter)
}

fn directive(module: &str, level: &str) -> Result<Directive, ResolverError> {
    format!("{}={}", module, level)
        .parse()
        .map_err(|e| ResolverError::ConfigError(format!("Invalid log directive: {}", e)))
}
