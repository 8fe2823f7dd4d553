//! Positional argument normalization for resolver construction.
//!
//! Accepted shapes:
//!
//! | arity | arguments |
//! |---|---|
//! | 0 | nothing (warns, builds an empty resolver) |
//! | 1 | `paths` |
//! | 2 | `paths, options` or `rootPath, paths` |
//! | 3 | `rootPath, paths, options` |

use super::options::{Configuration, ResolverOptions};
use crate::error::ResolverError;
use serde_json::Value;

/// Turn 0-3 loosely-typed positional arguments into a [`Configuration`].
pub fn normalize_args(args: &[Value]) -> Result<Configuration, ResolverError> {
    match args {
        [] => {
            tracing::warn!(
                "Resolver was passed no arguments. Initialization must be done manually by calling 'initialize'"
            );
            Configuration::empty()
        }
        [paths @ Value::Object(_)] => Configuration::build(None, Some(paths), ResolverOptions::new()),
        [paths @ Value::Object(_), Value::Object(options)] => {
            if options.contains_key("paths") {
                tracing::warn!(
                    "Resolver was passed a 'paths' argument and an options object with 'paths'. Using the 'paths' argument"
                );
            }
            Configuration::build(None, Some(paths), ResolverOptions::from_object(options))
        }
        [Value::String(root), paths @ Value::Object(_)] => {
            Configuration::build(Some(root.as_str()), Some(paths), ResolverOptions::new())
        }
        [Value::String(root), paths @ Value::Object(_), Value::Object(options)] => {
            if options.contains_key("rootPath") {
                tracing::warn!(
                    "Resolver was passed a 'rootPath' argument and an options object with 'rootPath'. Using the 'rootPath' argument"
                );
            }
            if options.contains_key("paths") {
                tracing::warn!(
                    "Resolver was passed a 'paths' argument and an options object with 'paths'. Using the 'paths' argument"
                );
            }
            Configuration::build(
                Some(root.as_str()),
                Some(paths),
                ResolverOptions::from_object(options),
            )
        }
        [_] | [_, _] | [_, _, _] => Err(ResolverError::InvalidArguments(format!(
            "Unsupported argument types ({}). Expected (paths), (paths, options), (rootPath, paths) or (rootPath, paths, options)",
            describe(args)
        ))),
        _ => Err(ResolverError::InvalidArguments(format!(
            "Resolver accepts between 1-3 arguments, '{}' found",
            args.len()
        ))),
    }
}

fn describe(args: &[Value]) -> String {
    args.iter()
        .map(|arg| match arg {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        })
        .collect::<Vec<_>>()
        .join(", ")
}
