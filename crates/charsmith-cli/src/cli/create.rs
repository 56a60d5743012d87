//! Character creation command (`charsmith` / `charsmith create`).

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use console::style;

use charsmith_core::wizard::runner::{run_wizard, WizardOutcome};
use charsmith_core::wizard::writer::render_character;
use charsmith_infra::filesystem::LocalFileSystem;

use super::session::{is_interactive, PlainSession, TerminalSession};

/// Run the wizard on stdin (prompts on stderr) and write the character file.
///
/// Uses dialoguer line editing on a TTY and plain line reads otherwise, so
/// answers can be piped in. Errors are returned to the caller untouched.
///
/// # Examples
///
/// ```bash
/// # Interactive wizard in the current directory
/// charsmith
///
/// # Scripted, into ./characters
/// printf 'Rex\ndiscord\nen_US-male-medium\n\n' | charsmith --output-dir characters
/// ```
pub async fn create_character(output_dir: &Path, json: bool) -> Result<()> {
    let fs = LocalFileSystem::new();

    let outcome = if is_interactive() {
        run_wizard(TerminalSession::new(), &fs, output_dir).await?
    } else {
        run_wizard(PlainSession::stdio(), &fs, output_dir).await?
    };

    report_outcome(&mut std::io::stdout().lock(), &outcome, json)
}

/// Write the command's result: the saved record as JSON, or a short summary.
///
/// Prompts never go through `out`, so with `json` set it holds one document.
fn report_outcome<W: Write>(out: &mut W, outcome: &WizardOutcome, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", render_character(&outcome.record)?)?;
        return Ok(());
    }

    let record = &outcome.record;
    let clients = if record.clients.is_empty() {
        style("none".to_string()).dim().to_string()
    } else {
        record.clients.join(", ")
    };

    writeln!(out)?;
    writeln!(out, "  {} Character created!", style("✓").green().bold())?;
    writeln!(out)?;
    writeln!(out, "  {}  {}", style("Name:").bold(), style(&record.name).cyan())?;
    writeln!(out, "  {}  {}", style("Clients:").bold(), clients)?;
    writeln!(
        out,
        "  {}  {}",
        style("Examples:").bold(),
        record.message_examples.len()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "  Fill in bio, lore, topics and style: {}",
        style(format!("$EDITOR {}", outcome.path.display())).yellow()
    )?;
    writeln!(out)?;
    Ok(())
}
