//! Top-level wizard run: interview, assemble, save.
//!
//! The runner owns the input session for the whole run and closes it on
//! every exit path. Failures are returned, not swallowed, so the caller
//! decides how to report them and which exit status to use.

use std::path::{Path, PathBuf};

use charsmith_types::character::CharacterRecord;
use charsmith_types::error::WizardError;

use crate::service::fs::FileSystem;

use super::assembler::CharacterAssembler;
use super::prompts::saved_line;
use super::sequencer::conduct_interview;
use super::source::LineSource;
use super::writer::save_character;

/// The result of a successful wizard run.
#[derive(Debug, Clone)]
pub struct WizardOutcome {
    pub record: CharacterRecord,
    /// Where the character file was written.
    pub path: PathBuf,
}

/// Run the character creation wizard end to end.
///
/// Consumes `session`; it is closed exactly once whether the run succeeds
/// or fails. Any input or write failure discards the whole interview.
pub async fn run_wizard<S, F>(
    mut session: S,
    fs: &F,
    output_dir: &Path,
) -> Result<WizardOutcome, WizardError>
where
    S: LineSource,
    F: FileSystem,
{
    let result = interview_and_save(&mut session, fs, output_dir).await;
    session.close().await;

    if let Err(ref e) = result {
        tracing::debug!(error = %e, "wizard aborted");
    }
    result
}

async fn interview_and_save<S, F>(
    session: &mut S,
    fs: &F,
    output_dir: &Path,
) -> Result<WizardOutcome, WizardError>
where
    S: LineSource,
    F: FileSystem,
{
    let answers = conduct_interview(session).await?;
    let record = CharacterAssembler::assemble(answers);
    let path = save_character(fs, output_dir, &record).await?;

    // The file is already on disk; a failed confirmation must not undo that.
    if let Err(e) = session.say(&saved_line(&path.display().to_string())).await {
        tracing::warn!(error = %e, "could not report saved file name");
    }

    Ok(WizardOutcome { record, path })
}

#[cfg(test)]
mod tests {
    use charsmith_types::character::USER_PLACEHOLDER;

    use super::*;
    use crate::test_support::{MemoryFileSystem, ScriptedSource};
    use crate::wizard::writer::load_character;

    fn rex_script() -> ScriptedSource {
        ScriptedSource::new(&[
            "Rex",
            "discord,telegram",
            "en_US-male-medium",
            "hi",
            "hello there",
            "",
        ])
    }

    #[tokio::test]
    async fn test_end_to_end_rex() {
        let fs = MemoryFileSystem::new();
        let source = rex_script();
        let transcript = source.transcript();

        let outcome = run_wizard(source, &fs, Path::new("")).await.unwrap();

        assert_eq!(outcome.path, PathBuf::from("rex.character.json"));
        let written: serde_json::Value =
            serde_json::from_str(&fs.get(&outcome.path).unwrap()).unwrap();
        assert_eq!(written["clients"], serde_json::json!(["discord", "telegram"]));
        assert_eq!(written["settings"]["voice"]["model"], "en_US-male-medium");
        assert_eq!(
            written["messageExamples"],
            serde_json::json!([[
                {"user": USER_PLACEHOLDER, "content": {"text": "hi"}},
                {"user": "Rex", "content": {"text": "hello there"}}
            ]])
        );

        let transcript = transcript.lock().unwrap();
        assert_eq!(transcript.close_calls, 1);
        assert_eq!(
            transcript.said.last().unwrap(),
            "\nCharacter file saved as: rex.character.json"
        );
    }

    #[tokio::test]
    async fn test_written_file_matches_returned_record() {
        let fs = MemoryFileSystem::new();

        let outcome = run_wizard(rex_script(), &fs, Path::new("out")).await.unwrap();
        let loaded = load_character(&fs, &outcome.path).await.unwrap();

        assert_eq!(loaded, outcome.record);
    }

    #[tokio::test]
    async fn test_two_exchanges_then_empty_line() {
        let fs = MemoryFileSystem::new();
        let source = ScriptedSource::new(&[
            "Luna", "twitter", "", "q1", "a1", "q2", "a2", "",
        ]);

        let outcome = run_wizard(source, &fs, Path::new("")).await.unwrap();

        assert_eq!(outcome.record.message_examples.len(), 2);
    }

    #[tokio::test]
    async fn test_closes_session_when_input_ends_early() {
        let fs = MemoryFileSystem::new();
        let source = ScriptedSource::new(&["Rex", "discord"]);
        let transcript = source.transcript();

        let err = run_wizard(source, &fs, Path::new("")).await.unwrap_err();

        assert!(matches!(err, WizardError::InputClosed));
        assert_eq!(transcript.lock().unwrap().close_calls, 1);
        assert_eq!(fs.file_count(), 0);
    }

    #[tokio::test]
    async fn test_closes_session_when_write_fails() {
        let fs = MemoryFileSystem::read_only();
        let source = rex_script();
        let transcript = source.transcript();

        let err = run_wizard(source, &fs, Path::new("")).await.unwrap_err();

        assert!(matches!(err, WizardError::Write { .. }));
        assert_eq!(transcript.lock().unwrap().close_calls, 1);
    }

    #[tokio::test]
    async fn test_output_failure_aborts_before_write() {
        let fs = MemoryFileSystem::new();
        let source = rex_script().failing_output();
        let transcript = source.transcript();

        let err = run_wizard(source, &fs, Path::new("")).await.unwrap_err();

        assert!(matches!(err, WizardError::Output(_)));
        assert_eq!(fs.file_count(), 0);
        assert_eq!(transcript.lock().unwrap().close_calls, 1);
    }
}
