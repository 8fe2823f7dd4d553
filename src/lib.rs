//! Dirmap: Path Resolvers from a Directory Map
//!
//! Turns a declarative, nested description of a project's directory layout
//! into a table of named resolver functions, an alias table and a mirrored
//! tree of absolute paths. Everything is lexical; no filesystem access
//! happens while building resolvers.
//!
//! ```no_run
//! use dirmap::PathResolver;
//! use serde_json::json;
//!
//! let resolver = PathResolver::with_root("/proj", json!({ "src": { "nav": {} } }))?;
//! assert_eq!(
//!     resolver.resolve("resolveSrcNav", "menu.js"),
//!     Some("/proj/src/nav/menu.js".into())
//! );
//! # Ok::<(), dirmap::ResolverError>(())
//! ```

pub mod case;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod paths;
pub mod registry;
pub mod resolver;
pub mod tooling;
pub mod tree;
pub mod walker;

pub use crate::config::{load_directory_map, normalize_args, Configuration, OptionsLoader, ResolverOptions};
pub use error::{ErrorPolicy, ResolverError, TableKind};
pub use registry::{format_resolver_key, make_relative_resolver, AliasMap, Resolver, ResolverTable};
pub use resolver::PathResolver;
pub use tree::{Directory, DirectoryNode, MirroredDirectory, MirroredNode, NodeConfig};
