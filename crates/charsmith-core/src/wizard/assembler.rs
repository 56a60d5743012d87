//! CharacterAssembler -- turns interview answers into a `CharacterRecord`.
//!
//! Follows the stateless utility pattern: no fields, everything passed in.
//! The placeholder-blank list fields are fixed here and never come from input.

use std::collections::BTreeMap;

use charsmith_types::character::{
    placeholder_blank, CharacterRecord, Settings, Style, VoiceSettings, CHARACTER_FILE_SUFFIX,
};

use super::sequencer::InterviewAnswers;

/// Stateless utility that assembles a complete character record.
pub struct CharacterAssembler;

impl CharacterAssembler {
    /// Build the record from collected answers.
    ///
    /// `secrets` is always empty; `bio`, `lore`, `knowledge`, `postExamples`,
    /// `topics`, `adjectives` and every `style` list hold one empty string.
    pub fn assemble(answers: InterviewAnswers) -> CharacterRecord {
        CharacterRecord {
            name: answers.name,
            clients: answers.clients,
            settings: Settings {
                secrets: BTreeMap::new(),
                voice: VoiceSettings {
                    model: answers.voice_model,
                },
            },
            bio: placeholder_blank(),
            lore: placeholder_blank(),
            knowledge: placeholder_blank(),
            message_examples: answers.message_examples,
            post_examples: placeholder_blank(),
            topics: placeholder_blank(),
            style: Style::placeholder(),
            adjectives: placeholder_blank(),
        }
    }
}

/// Derive the output file name for a character.
///
/// Lowercases the name, replaces each run of whitespace with a single hyphen
/// and appends `.character.json`. No other sanitization happens: path
/// separators and other special characters pass through unchanged.
///
/// # Examples
///
/// ```
/// use charsmith_core::wizard::assembler::character_filename;
///
/// assert_eq!(character_filename("Eliza Bot"), "eliza-bot.character.json");
/// assert_eq!(character_filename("A   B"), "a-b.character.json");
/// ```
pub fn character_filename(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len() + CHARACTER_FILE_SUFFIX.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if is_slug_whitespace(c) {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug.push_str(CHARACTER_FILE_SUFFIX);
    slug
}

/// Whitespace as matched by the `\s` class of ECMAScript regular expressions.
///
/// Same as Unicode `White_Space` except that U+0085 (NEL) is excluded and
/// U+FEFF (byte order mark) is included.
fn is_slug_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

#[cfg(test)]
mod tests {
    use charsmith_types::character::{is_placeholder_blank, ExchangePair};

    use super::*;

    fn answers() -> InterviewAnswers {
        InterviewAnswers {
            name: "Rex".to_string(),
            clients: vec!["discord".to_string(), "telegram".to_string()],
            voice_model: "en_US-male-medium".to_string(),
            message_examples: vec![ExchangePair::new("Rex", "hi", "hello there")],
        }
    }

    #[test]
    fn test_filename_basic() {
        assert_eq!(character_filename("Eliza Bot"), "eliza-bot.character.json");
    }

    #[test]
    fn test_filename_collapses_whitespace_runs() {
        assert_eq!(character_filename("A   B"), "a-b.character.json");
        assert_eq!(character_filename("a \t\n b"), "a-b.character.json");
    }

    #[test]
    fn test_filename_keeps_edge_whitespace_as_hyphens() {
        assert_eq!(character_filename(" Rex "), "-rex-.character.json");
    }

    #[test]
    fn test_filename_whitespace_matches_ecmascript_class() {
        assert_eq!(character_filename("A\u{FEFF}B"), "a-b.character.json");
        assert_eq!(character_filename("A\u{00A0}\u{3000}B"), "a-b.character.json");
        assert_eq!(character_filename("A\u{85}B"), "a\u{85}b.character.json");
    }

    #[test]
    fn test_filename_does_not_sanitize() {
        assert_eq!(character_filename(""), ".character.json");
        assert_eq!(character_filename("Dr. Who?"), "dr.-who?.character.json");
        assert_eq!(character_filename("../Up"), "../up.character.json");
    }

    #[test]
    fn test_filename_is_deterministic() {
        assert_eq!(character_filename("Luna Moth"), character_filename("Luna Moth"));
    }

    #[test]
    fn test_assemble_copies_answers() {
        let record = CharacterAssembler::assemble(answers());

        assert_eq!(record.name, "Rex");
        assert_eq!(record.clients, vec!["discord", "telegram"]);
        assert_eq!(record.settings.voice.model, "en_US-male-medium");
        assert!(record.settings.secrets.is_empty());
        assert_eq!(record.message_examples.len(), 1);
    }

    #[test]
    fn test_assemble_sets_placeholder_blanks() {
        let record = CharacterAssembler::assemble(answers());

        for field in [
            &record.bio,
            &record.lore,
            &record.knowledge,
            &record.post_examples,
            &record.topics,
            &record.adjectives,
            &record.style.all,
            &record.style.chat,
            &record.style.post,
        ] {
            assert!(is_placeholder_blank(field));
        }
    }

    #[test]
    fn test_assemble_placeholders_ignore_input() {
        let mut empty = answers();
        empty.name = String::new();
        empty.clients.clear();
        empty.message_examples.clear();

        let a = CharacterAssembler::assemble(answers());
        let b = CharacterAssembler::assemble(empty);

        assert_eq!(a.bio, b.bio);
        assert_eq!(a.style, b.style);
        assert_eq!(a.unfilled_fields(), b.unfilled_fields());
    }
}
