//! Error types for resolver construction and directory map loading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which output table a duplicate key collided in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// The directory-resolver table (`paths` by default)
    Resolvers,
    /// The alias table (`aliases` by default)
    Aliases,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::Resolvers => write!(f, "resolver"),
            TableKind::Aliases => write!(f, "alias"),
        }
    }
}

/// Errors raised while normalizing arguments, walking a directory map or
/// loading configuration.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(
        "Duplicate {table} key '{key}'. Make sure all directories have a unique key, or use names / aliases"
    )]
    DuplicateKey { table: TableKind, key: String },

    #[error("Malformed directory map entry at '{path}': {reason}")]
    MalformedNode { path: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No resolver registered under '{0}'")]
    UnknownResolver(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResolverError {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ResolverError::MalformedNode {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for the error kinds that a lenient duplicate policy may report and skip.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ResolverError::DuplicateKey { .. } | ResolverError::MalformedNode { .. }
        )
    }
}

impl From<config::ConfigError> for ResolverError {
    fn from(err: config::ConfigError) -> Self {
        ResolverError::ConfigError(err.to_string())
    }
}

/// How recoverable errors (duplicate keys, malformed entries) are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Propagate the error and abort construction
    #[default]
    Fail,
    /// Log the error and skip only the offending entry
    Report,
}

impl ErrorPolicy {
    /// Route a recoverable error according to the policy.
    ///
    /// Non-recoverable errors are always returned.
    pub fn handle(self, err: ResolverError) -> Result<(), ResolverError> {
        match self {
            ErrorPolicy::Report if err.is_recoverable() => {
                if matches!(err, ResolverError::MalformedNode { .. }) {
                    tracing::warn!(error = %err, "Skipping malformed entry");
                } else {
                    tracing::error!(error = %err, "Skipping entry");
                }
                Ok(())
            }
            _ => Err(err),
        }
    }
}
