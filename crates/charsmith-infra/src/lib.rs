//! Infrastructure adapters for charsmith.
//!
//! Implements the port traits from `charsmith-core` against the real
//! filesystem and loads the optional global configuration file.

pub mod config;
pub mod filesystem;
