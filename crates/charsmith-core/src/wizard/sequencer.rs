//! Prompt sequencer -- drives the ordered question/answer exchange.
//!
//! The steps run in a fixed order: name, client list, voice model, then a
//! variable-length loop of example exchanges that ends on the first empty
//! user message. The example loop is exposed as a lazy stream so it can be
//! driven by any [`LineSource`], scripted or interactive.

use charsmith_types::character::{ExchangePair, KnownClient};
use charsmith_types::error::WizardError;
use futures_util::{Stream, TryStreamExt};

use super::prompts::{
    available_clients_line, CLIENTS_PROMPT, EXAMPLES_HINT, EXAMPLES_INTRO, NAME_PROMPT,
    RESPONSE_PROMPT, USER_MESSAGE_PROMPT, VOICE_MODEL_PROMPT, WIZARD_BANNER,
};
use super::source::LineSource;

/// Raw answers collected by the interview, before assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewAnswers {
    /// Character name exactly as typed.
    pub name: String,
    pub clients: Vec<String>,
    pub voice_model: String,
    pub message_examples: Vec<ExchangePair>,
}

/// Split a comma-separated client list.
///
/// Tokens are trimmed and empty tokens dropped; order and duplicates are
/// kept as typed.
///
/// # Examples
///
/// ```
/// use charsmith_core::wizard::sequencer::parse_clients;
///
/// assert_eq!(parse_clients(" discord, , twitter ,"), vec!["discord", "twitter"]);
/// ```
pub fn parse_clients(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lazily collect example exchanges from `source`.
///
/// Each item prints a blank separator line, asks for a user message and,
/// unless it is empty, a character response. The stream ends on the first
/// empty user message; there is no other exit and no iteration cap. Any
/// input error is yielded once and ends the stream.
pub fn exchange_pairs<'a, S: LineSource>(
    source: &'a mut S,
    character_name: &'a str,
) -> impl Stream<Item = Result<ExchangePair, WizardError>> + Send + 'a {
    async_stream::try_stream! {
        loop {
            source.say("").await?;
            let user_message = source.ask(USER_MESSAGE_PROMPT).await?;
            if user_message.is_empty() {
                break;
            }

            let response = source.ask(RESPONSE_PROMPT).await?;
            yield ExchangePair::new(character_name, user_message, response);
        }
    }
}

/// Run the full interview against `source`.
///
/// Nothing is written anywhere; the caller assembles and persists the
/// answers.
#[tracing::instrument(skip_all)]
pub async fn conduct_interview<S: LineSource>(
    source: &mut S,
) -> Result<InterviewAnswers, WizardError> {
    source.say(WIZARD_BANNER).await?;

    let name = source.ask(NAME_PROMPT).await?;
    tracing::debug!(name = %name, "captured character name");

    source.say(&available_clients_line()).await?;
    let clients = parse_clients(&source.ask(CLIENTS_PROMPT).await?);
    for client in clients.iter().filter(|c| !KnownClient::is_known(c)) {
        tracing::debug!(client = %client, "client is not one of the advertised identifiers");
    }

    let voice_model = source.ask(VOICE_MODEL_PROMPT).await?;

    source.say(EXAMPLES_INTRO).await?;
    source.say(EXAMPLES_HINT).await?;

    let message_examples: Vec<ExchangePair> =
        exchange_pairs(&mut *source, &name).try_collect().await?;
    tracing::debug!(count = message_examples.len(), "collected message examples");

    Ok(InterviewAnswers {
        name,
        clients,
        voice_model,
        message_examples,
    })
}
