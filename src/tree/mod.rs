//! Directory map input nodes and the mirrored output tree.

pub mod mirror;
pub mod node;

pub use mirror::{MirroredDirectory, MirroredNode};
pub use node::{Directory, DirectoryNode, NodeConfig, CONFIG_KEY, ROOT_KEY};
