//! Message extraction from chat-export lines.
//!
//! Android and iOS exports disagree on the prefix shape:
//!
//! ```text
//! 12/1/24, 21:15 - Ana: running late, sorry
//! [12/1/24, 9:15:42 PM] Ana: running late, sorry
//! ```
//!
//! Rather than one pattern per export dialect, a single permissive rule is
//! used: everything up to and including the first colon-space is the header
//! (timestamp plus sender), the remainder is the body. This tolerates sender
//! names containing punctuation and minor formatting drift, at the accepted
//! cost of misparsing a body that itself starts with a "word: word" shape.

use moodline_core::constants;
use moodline_core::types::Message;
use tracing::debug;

/// Header/body separator: the first colon followed by a space ends the
/// sender segment. Timestamps only ever contain colons without a following
/// space, so they never split the line early.
const HEADER_SEPARATOR: &str = ": ";

/// Configuration for the message extractor.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Lowercased platform-notice fragments; any match disqualifies a line.
    system_phrases: Vec<String>,
    /// Lowercased media placeholder marker; any match disqualifies a body.
    media_marker: String,
}

impl ExtractorConfig {
    /// Build an extractor configuration from phrase and marker lists.
    pub fn new(system_phrases: &[String], media_marker: &str) -> Self {
        Self {
            system_phrases: system_phrases
                .iter()
                .map(|phrase| phrase.to_lowercase())
                .collect(),
            media_marker: media_marker.to_lowercase(),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            system_phrases: constants::DEFAULT_SYSTEM_PHRASES
                .iter()
                .map(|phrase| phrase.to_lowercase())
                .collect(),
            media_marker: constants::MEDIA_PLACEHOLDER.to_lowercase(),
        }
    }
}

/// Extract the ordered sequence of user messages from normalized lines.
///
/// Lines that do not parse as messages are a normal filtering outcome, not
/// an error; the result may be empty. Accepted messages carry their 0-based
/// position among accepted messages, in order of appearance.
pub fn extract_messages(lines: &[String], config: &ExtractorConfig) -> Vec<Message> {
    let mut messages = Vec::new();
    for line in lines {
        if let Some(body) = extract_body(line, config) {
            messages.push(Message {
                text: body,
                position: messages.len(),
            });
        }
    }
    debug!(
        lines = lines.len(),
        messages = messages.len(),
        "extracted messages from transcript"
    );
    messages
}

/// Extract the message body from a single line, or `None` when the line is
/// not a genuine user message.
///
/// Rejection rules, in order: system phrase anywhere in the line, missing or
/// empty header, body shorter than 2 characters after trimming, media
/// placeholder in the body.
fn extract_body(line: &str, config: &ExtractorConfig) -> Option<String> {
    let lowered = line.to_lowercase();
    if config
        .system_phrases
        .iter()
        .any(|phrase| lowered.contains(phrase))
    {
        return None;
    }

    let separator = line.find(HEADER_SEPARATOR)?;
    // A qualifying colon needs a sender/timestamp segment in front of it.
    if separator == 0 {
        return None;
    }

    let body = line[separator + HEADER_SEPARATOR.len()..].trim();
    if body.chars().count() < constants::MIN_MESSAGE_CHARS {
        return None;
    }
    if body.to_lowercase().contains(&config.media_marker) {
        return None;
    }

    Some(body.to_string())
}
