//! Option source composition.

pub mod service;
