//! Global configuration loader for charsmith.
//!
//! Reads `config.toml` from the data directory (`~/.charsmith/` by default)
//! and deserializes it into [`GlobalConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use charsmith_types::config::GlobalConfig;

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Resolve where character files are written.
///
/// Priority:
/// 1. Explicit override (`--output-dir` / `CHARSMITH_OUTPUT_DIR`)
/// 2. `output_dir` from `config.toml`
/// 3. The current working directory (empty path)
pub fn resolve_output_dir(global_config: &GlobalConfig, cli_override: Option<PathBuf>) -> PathBuf {
    cli_override
        .or_else(|| global_config.output_dir.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config, GlobalConfig::default());
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "output_dir = \"chars\"\n")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.output_dir, Some(PathBuf::from("chars")));
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn resolve_output_dir_prefers_override() {
        let global = GlobalConfig {
            output_dir: Some(PathBuf::from("from-config")),
        };
        let dir = resolve_output_dir(&global, Some(PathBuf::from("from-flag")));
        assert_eq!(dir, PathBuf::from("from-flag"));
    }

    #[test]
    fn resolve_output_dir_falls_back_to_config() {
        let global = GlobalConfig {
            output_dir: Some(PathBuf::from("from-config")),
        };
        assert_eq!(resolve_output_dir(&global, None), PathBuf::from("from-config"));
    }

    #[test]
    fn resolve_output_dir_defaults_to_working_directory() {
        let dir = resolve_output_dir(&GlobalConfig::default(), None);
        assert_eq!(dir, PathBuf::new());
    }
}
