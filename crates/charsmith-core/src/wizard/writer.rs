//! Character file persistence.
//!
//! One pretty-printed JSON document per character, written with a single
//! create-or-truncate call. No temp file, no rename, no retry.

use std::path::{Path, PathBuf};

use charsmith_types::character::CharacterRecord;
use charsmith_types::error::WizardError;

use crate::service::fs::FileSystem;

use super::assembler::character_filename;

/// Render a record as 2-space indented JSON.
pub fn render_character(record: &CharacterRecord) -> Result<String, WizardError> {
    serde_json::to_string_pretty(record).map_err(|e| WizardError::Serialize(e.to_string()))
}

/// Write `record` to `{output_dir}/{character_filename(name)}`.
///
/// An existing file with the same name is overwritten. `output_dir` itself is
/// created if missing (an empty path means the working directory); parents
/// implied by separators inside the name are not.
pub async fn save_character<F: FileSystem>(
    fs: &F,
    output_dir: &Path,
    record: &CharacterRecord,
) -> Result<PathBuf, WizardError> {
    let content = render_character(record)?;
    let path = output_dir.join(character_filename(&record.name));

    if !output_dir.as_os_str().is_empty() && !fs.exists(output_dir).await {
        fs.create_dir_all(output_dir)
            .await
            .map_err(|e| WizardError::Write {
                path: output_dir.to_path_buf(),
                message: e.to_string(),
            })?;
    }

    fs.write_file(&path, &content)
        .await
        .map_err(|e| WizardError::Write {
            path: path.clone(),
            message: e.to_string(),
        })?;

    tracing::info!(path = %path.display(), "character file written");
    Ok(path)
}

/// Read a character file back into a record.
pub async fn load_character<F: FileSystem>(
    fs: &F,
    path: &Path,
) -> Result<CharacterRecord, WizardError> {
    let content = fs.read_file(path).await.map_err(|e| WizardError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| WizardError::InvalidRecord(e.to_string()))
}
