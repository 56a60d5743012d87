use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while running the character wizard or reading its output.
///
/// Every variant aborts the run; nothing is retried and a partially
/// completed interview is discarded.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("input error: {0}")]
    Input(String),

    #[error("output error: {0}")]
    Output(String),

    #[error("input stream closed before the wizard finished")]
    InputClosed,

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("failed to write '{}': {message}", .path.display())]
    Write { path: PathBuf, message: String },

    #[error("failed to read '{}': {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("invalid character file: {0}")]
    InvalidRecord(String),
}

impl WizardError {
    /// Wrap a failure to write prompts or messages to the session output.
    pub fn output(err: std::io::Error) -> Self {
        WizardError::Output(err.to_string())
    }
}

/// Read-side I/O failures. End of input and an interrupted read both mean
/// the user abandoned the prompt.
impl From<std::io::Error> for WizardError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::Interrupted => {
                WizardError::InputClosed
            }
            _ => WizardError::Input(err.to_string()),
        }
    }
}
