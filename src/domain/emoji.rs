use crate::domain::DiscordId;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// Matches `<a:name:id>` shorthand; every part of the wrapper is optional,
// and the search is unanchored, so fragments like `name:id` or `:name:`
// still match.
#[allow(clippy::unwrap_used)]
static EMOJI_SHORTHAND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<?(?:(a):)?([0-9A-Za-z_]{2,32}):([0-9]{17,19})?>?").unwrap());

/// The emoji attached to a custom status. Either a custom emoji (id set,
/// possibly animated) or a literal unicode emoji (name only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityEmoji {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub animated: bool,
}

impl ActivityEmoji {
    /// Best-effort parse; never fails. A bare snowflake becomes an
    /// id-only reference, the `<a:name:id>` shorthand is decomposed, and
    /// anything else is taken as a literal emoji name.
    pub fn parse(text: &str) -> Self {
        if DiscordId::is_valid(text) {
            return Self {
                id: text.to_string(),
                ..Self::default()
            };
        }

        if let Some(captures) = EMOJI_SHORTHAND_REGEX.captures(text) {
            return Self {
                name: captures
                    .get(2)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                id: captures
                    .get(3)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                animated: captures.get(1).is_some_and(|m| m.as_str() == "a"),
            };
        }

        Self {
            name: text.to_string(),
            ..Self::default()
        }
    }
}
