use serde::Deserialize;

use crate::catalog;

/// Code points at or below this value are plain text, not emoji
const MIN_EMOJI_CODEPOINT: u32 = 256;

/// One configured `emoji_names` entry
///
/// Strings are catalog names or literal emoji characters. Anything else the
/// config file may contain (numbers, booleans, nested lists) is kept as-is so
/// it can be reported and skipped instead of failing the whole config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EmojiToken {
    Text(String),
    Other(serde_yaml::Value),
}

impl From<&str> for EmojiToken {
    fn from(s: &str) -> Self {
        EmojiToken::Text(s.to_string())
    }
}

/// Resolve configured tokens into platform emoji ids, keeping input order.
/// Invalid tokens are logged and dropped
pub fn resolve(tokens: &[EmojiToken]) -> Vec<String> {
    tokens.iter().filter_map(resolve_token).collect()
}

fn resolve_token(token: &EmojiToken) -> Option<String> {
    let text = match token {
        EmojiToken::Text(text) => text,
        EmojiToken::Other(value) => {
            log::warn!("Configured emoji {:?} is not a string, skipping", value);
            return None;
        }
    };

    if let Some(id) = catalog::lookup(text) {
        return Some(id.to_string());
    }

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let codepoint = c as u32;
            if codepoint > MIN_EMOJI_CODEPOINT {
                Some(codepoint.to_string())
            } else {
                log::warn!(
                    "Configured emoji '{}' is a plain character, not an emoji, skipping",
                    text
                );
                None
            }
        }
        _ => {
            log::warn!(
                "Configured emoji '{}' is invalid: expected a single Unicode emoji or a known emoji name, skipping",
                text
            );
            None
        }
    }
}
