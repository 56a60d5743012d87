//! Terminal-backed `LineSource` implementations.
//!
//! `TerminalSession` uses dialoguer for line editing when stdin is a TTY;
//! `PlainSession` reads newline-terminated lines from any async reader and
//! is used for piped input.
//!
//! Both write prompts and progress text to stderr so stdout carries only
//! the command's result (`--json` output stays machine-readable).

use std::io::IsTerminal;

use console::Term;
use dialoguer::Input;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use charsmith_core::wizard::source::LineSource;
use charsmith_types::error::WizardError;

/// Whether both stdin and stderr (where prompts go) are attached to a terminal.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && Term::stderr().is_term()
}

/// Map a failed dialoguer prompt onto the wizard's error type.
///
/// EOF and interrupts while editing mean the user closed the input.
pub(crate) fn prompt_error(err: dialoguer::Error) -> WizardError {
    match err {
        dialoguer::Error::IO(io) => WizardError::from(io),
    }
}

/// Interactive session on the controlling terminal.
pub struct TerminalSession {
    term: Term,
    closed: bool,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            closed: false,
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalSession {
    async fn ask(&mut self, prompt: &str) -> Result<String, WizardError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(prompt_error)
    }

    async fn say(&mut self, text: &str) -> Result<(), WizardError> {
        self.term.write_line(text).map_err(WizardError::output)
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        // dialoguer hides the cursor while editing; make sure it comes back.
        if let Err(e) = self.term.show_cursor() {
            tracing::debug!(error = %e, "failed to restore cursor");
        }
        if let Err(e) = self.term.flush() {
            tracing::debug!(error = %e, "failed to flush terminal");
        }
    }
}

/// Line-oriented session over an arbitrary reader/writer pair.
///
/// Prompts are written as `"{prompt}: "` without a newline. Only the line
/// terminator (`\n` or `\r\n`) is stripped from answers.
pub struct PlainSession<R, W> {
    reader: R,
    writer: W,
    closed: bool,
}

impl PlainSession<BufReader<tokio::io::Stdin>, tokio::io::Stderr> {
    /// Session reading stdin and prompting on stderr.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stderr())
    }
}

impl<R, W> PlainSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            closed: false,
        }
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.writer
    }
}

impl<R, W> LineSource for PlainSession<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn ask(&mut self, prompt: &str) -> Result<String, WizardError> {
        self.writer
            .write_all(format!("{prompt}: ").as_bytes())
            .await
            .map_err(WizardError::output)?;
        self.writer.flush().await.map_err(WizardError::output)?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(WizardError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    async fn say(&mut self, text: &str) -> Result<(), WizardError> {
        let line = format!("{text}\n");
        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(WizardError::output)?;
        self.writer.flush().await.map_err(WizardError::output)
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        if let Err(e) = self.writer.flush().await {
            tracing::debug!(error = %e, "failed to flush session output");
        }
    }
}
