//! LineSource trait -- the interactive input session the wizard talks to.
//!
//! Uses RPITIT (no async_trait) consistent with the other port traits.

use std::future::Future;

use charsmith_types::error::WizardError;

/// An interactive, line-oriented input/output session.
///
/// Every call suspends the wizard until it completes; the wizard never has
/// more than one prompt outstanding. Implementations live in the CLI crate
/// (terminal and piped stdin) and in tests (scripted lines).
pub trait LineSource: Send {
    /// Show `prompt` and wait for one line of input.
    ///
    /// Returns the line with only its terminator removed -- no trimming.
    /// End of input while waiting is reported as [`WizardError::InputClosed`].
    fn ask(&mut self, prompt: &str) -> impl Future<Output = Result<String, WizardError>> + Send;

    /// Write an informational line (banners, hints) to the session output.
    fn say(&mut self, text: &str) -> impl Future<Output = Result<(), WizardError>> + Send;

    /// Release the session. Calling it more than once has no further effect.
    fn close(&mut self) -> impl Future<Output = ()> + Send;
}
