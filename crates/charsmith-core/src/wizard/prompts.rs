//! Fixed text shown by the wizard.

use charsmith_types::character::KnownClient;

pub const WIZARD_BANNER: &str = "\n=== Eliza Character Creation Wizard ===\n";

pub const NAME_PROMPT: &str = "Enter character name";
pub const CLIENTS_PROMPT: &str = "Enter clients (comma-separated)";
pub const VOICE_MODEL_PROMPT: &str = "Enter voice model (e.g., en_US-male-medium)";

pub const EXAMPLES_INTRO: &str = "\nEnter message examples (enter empty line in user input to finish)";
pub const EXAMPLES_HINT: &str = "For each example, you'll enter a user message and a response";

pub const USER_MESSAGE_PROMPT: &str = "User message (empty line to finish)";
pub const RESPONSE_PROMPT: &str = "Character response";

/// `Available clients: discord, twitter, telegram`, preceded by a blank line.
pub fn available_clients_line() -> String {
    let names: Vec<String> = KnownClient::ALL.iter().map(|c| c.to_string()).collect();
    format!("\nAvailable clients: {}", names.join(", "))
}

/// Confirmation shown after the character file has been written.
pub fn saved_line(file_name: &str) -> String {
    format!("\nCharacter file saved as: {file_name}")
}
