//! Resolver configuration: options, argument normalization and file loading.

pub mod args;
pub mod facade;
pub mod map_file;
pub mod merge;
pub mod options;
pub mod sources;

pub use args::normalize_args;
pub use facade::OptionsLoader;
pub use map_file::load_directory_map;
pub use options::{Configuration, ResolverOptions};
