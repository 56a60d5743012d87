//! Character file health check (`charsmith check <FILE>`).

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use charsmith_core::wizard::assembler::character_filename;
use charsmith_core::wizard::writer::load_character;
use charsmith_infra::filesystem::LocalFileSystem;
use charsmith_types::character::{CharacterRecord, KnownClient};

/// Findings about a loaded character file.
#[derive(Debug)]
pub struct CheckReport {
    pub expected_file_name: String,
    pub file_name_matches: bool,
    pub unknown_clients: Vec<String>,
    pub unfilled_fields: Vec<&'static str>,
}

impl CheckReport {
    pub fn new(path: &Path, record: &CharacterRecord) -> Self {
        let expected_file_name = character_filename(&record.name);
        let file_name_matches = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy() == expected_file_name);

        Self {
            file_name_matches,
            expected_file_name,
            unknown_clients: record
                .clients
                .iter()
                .filter(|c| !KnownClient::is_known(c))
                .cloned()
                .collect(),
            unfilled_fields: record.unfilled_fields(),
        }
    }
}

/// Load `path`, confirm it is a valid character file, and summarize it.
///
/// Fails (non-zero exit) only when the file cannot be read or parsed.
pub async fn check_character(path: &Path, json: bool) -> Result<()> {
    let fs = LocalFileSystem::new();
    let record = load_character(&fs, path)
        .await
        .with_context(|| format!("Failed to load character file {}", path.display()))?;
    let report = CheckReport::new(path, &record);

    if json {
        let check = serde_json::json!({
            "path": path.display().to_string(),
            "name": record.name,
            "clients": record.clients,
            "unknown_clients": report.unknown_clients,
            "message_examples": record.message_examples.len(),
            "unfilled_fields": report.unfilled_fields,
            "expected_file_name": report.expected_file_name,
            "file_name_matches": report.file_name_matches,
        });
        println!("{}", serde_json::to_string_pretty(&check)?);
        return Ok(());
    }

    let check_mark = |ok: bool| {
        if ok {
            format!("{}", style("✓").green())
        } else {
            format!("{}", style("✗").red())
        }
    };

    println!();
    println!(
        "  {} Check for '{}'",
        style("🔍").bold(),
        style(&record.name).cyan()
    );
    println!();
    println!("  {} Parses as a character file", check_mark(true));
    println!(
        "  {} File name matches {}",
        check_mark(report.file_name_matches),
        style(&report.expected_file_name).dim()
    );
    println!(
        "  {} Clients recognized{}",
        check_mark(report.unknown_clients.is_empty()),
        if report.unknown_clients.is_empty() {
            String::new()
        } else {
            format!(" (unknown: {})", report.unknown_clients.join(", "))
        }
    );
    println!(
        "  {} {} message example(s)",
        check_mark(!record.message_examples.is_empty()),
        record.message_examples.len()
    );
    println!(
        "  {} All fields filled{}",
        check_mark(report.unfilled_fields.is_empty()),
        if report.unfilled_fields.is_empty() {
            String::new()
        } else {
            format!(" (still blank: {})", report.unfilled_fields.join(", "))
        }
    );
    println!();

    Ok(())
}
