use crate::error::ValidationError;
use regex::Regex;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

#[allow(clippy::unwrap_used)]
static DISCORD_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{17,19}$").unwrap());

/// A platform-native snowflake: 17 to 19 decimal digits, as assigned to
/// users, applications and guilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordId(String);

impl DiscordId {
    /// Returns an instance of `DiscordId` if the input matches the
    /// snowflake pattern. The value is stored unchanged.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !DISCORD_ID_REGEX.is_match(s) {
            return Err(ValidationError::InvalidDiscordId(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }

    pub fn is_valid(s: &str) -> bool {
        DISCORD_ID_REGEX.is_match(s)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for DiscordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for DiscordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
