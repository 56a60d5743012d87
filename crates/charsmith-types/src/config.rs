//! Global configuration types for charsmith.
//!
//! `GlobalConfig` represents the optional `config.toml` in the data directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from `~/.charsmith/config.toml`.
///
/// All fields are optional; a missing file is equivalent to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Directory character files are written to. Falls back to the
    /// current working directory when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}
