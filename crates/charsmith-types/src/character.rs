use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Speaker token used for the user side of every example exchange.
pub const USER_PLACEHOLDER: &str = "{{user1}}";

/// Suffix appended to the slugified character name to form the output file name.
pub const CHARACTER_FILE_SUFFIX: &str = ".character.json";

/// A list holding exactly one empty string: "present but unfilled".
///
/// Distinct from an empty list. Every free-text list field of a fresh
/// character starts out this way so it is ready for hand editing.
pub fn placeholder_blank() -> Vec<String> {
    vec![String::new()]
}

/// Returns true if `values` is still the untouched placeholder-blank list.
pub fn is_placeholder_blank(values: &[String]) -> bool {
    values.len() == 1 && values[0].is_empty()
}

/// A character definition as written to `<slug>.character.json`.
///
/// Field order matches the on-disk JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    /// Display name, exactly as typed (no trimming or validation).
    pub name: String,
    /// Client identifiers the character should be deployed to, in input order.
    pub clients: Vec<String>,
    pub settings: Settings,
    pub bio: Vec<String>,
    pub lore: Vec<String>,
    pub knowledge: Vec<String>,
    /// Few-shot conversation samples, one pair per completed exchange.
    pub message_examples: Vec<ExchangePair>,
    pub post_examples: Vec<String>,
    pub topics: Vec<String>,
    pub style: Style,
    pub adjectives: Vec<String>,
}

impl CharacterRecord {
    /// Names of the free-text list fields that still hold only the placeholder blank.
    pub fn unfilled_fields(&self) -> Vec<&'static str> {
        let fields: [(&'static str, &Vec<String>); 9] = [
            ("bio", &self.bio),
            ("lore", &self.lore),
            ("knowledge", &self.knowledge),
            ("postExamples", &self.post_examples),
            ("topics", &self.topics),
            ("adjectives", &self.adjectives),
            ("style.all", &self.style.all),
            ("style.chat", &self.style.chat),
            ("style.post", &self.style.post),
        ];

        fields
            .into_iter()
            .filter(|(_, values)| is_placeholder_blank(values))
            .map(|(field, _)| field)
            .collect()
    }
}

/// Runtime settings attached to a character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Reserved for provider credentials. The wizard never populates it.
    pub secrets: BTreeMap<String, String>,
    pub voice: VoiceSettings,
}

/// Text-to-speech voice configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Voice model identifier (e.g. `en_US-male-medium`). Not validated.
    pub model: String,
}

/// Writing-style guidance, split by output surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub all: Vec<String>,
    pub chat: Vec<String>,
    pub post: Vec<String>,
}

impl Style {
    /// A style block with every surface set to the placeholder blank.
    pub fn placeholder() -> Self {
        Self {
            all: placeholder_blank(),
            chat: placeholder_blank(),
            post: placeholder_blank(),
        }
    }
}

/// One speaker's message inside an [`ExchangePair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Speaker identifier: [`USER_PLACEHOLDER`] or the character's name.
    pub user: String,
    pub content: TurnContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContent {
    pub text: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            content: TurnContent { text: text.into() },
        }
    }
}

/// A user message followed by the character's response.
///
/// Serialized as a two-element JSON array `[user_turn, character_turn]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangePair(Turn, Turn);

impl ExchangePair {
    /// Build a pair where the user side is spoken by [`USER_PLACEHOLDER`]
    /// and the response side by `character_name`.
    pub fn new(
        character_name: impl Into<String>,
        user_message: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self(
            Turn::new(USER_PLACEHOLDER, user_message),
            Turn::new(character_name, response),
        )
    }

    pub fn user_turn(&self) -> &Turn {
        &self.0
    }

    pub fn character_turn(&self) -> &Turn {
        &self.1
    }
}

/// Client identifiers the wizard advertises.
///
/// Display-only: clients outside this set are still accepted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownClient {
    Discord,
    Twitter,
    Telegram,
}

impl KnownClient {
    pub const ALL: [KnownClient; 3] = [
        KnownClient::Discord,
        KnownClient::Twitter,
        KnownClient::Telegram,
    ];

    /// Whether `client` names one of the advertised identifiers (exact match).
    pub fn is_known(client: &str) -> bool {
        client.parse::<KnownClient>().is_ok()
    }
}

impl fmt::Display for KnownClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnownClient::Discord => write!(f, "discord"),
            KnownClient::Twitter => write!(f, "twitter"),
            KnownClient::Telegram => write!(f, "telegram"),
        }
    }
}

impl FromStr for KnownClient {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discord" => Ok(KnownClient::Discord),
            "twitter" => Ok(KnownClient::Twitter),
            "telegram" => Ok(KnownClient::Telegram),
            other => Err(format!("unknown client: '{other}'")),
        }
    }
}
