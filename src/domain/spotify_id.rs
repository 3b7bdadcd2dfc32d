use crate::error::ValidationError;
use regex::Regex;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

#[allow(clippy::unwrap_used)]
static SPOTIFY_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z]{22}$").unwrap());

/// A Spotify catalog id: exactly 22 alphanumeric characters, used for
/// tracks, albums and artists alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyId(String);

impl SpotifyId {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !SPOTIFY_ID_REGEX.is_match(s) {
            return Err(ValidationError::InvalidSpotifyId(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for SpotifyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for SpotifyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::SpotifyId;
    use claims::{assert_err, assert_ok};
    use proptest::prelude::*;

    #[test]
    fn a_22_character_alphanumeric_id_is_valid() {
        assert_ok!(SpotifyId::parse("1234567890123456789012"));
        assert_ok!(SpotifyId::parse("4uLU6hMCjMI75M1A2tKUQC"));
    }

    #[test]
    fn a_21_character_id_is_rejected() {
        assert_err!(SpotifyId::parse("123456789012345678901"));
    }

    #[test]
    fn a_23_character_id_is_rejected() {
        assert_err!(SpotifyId::parse("12345678901234567890123"));
    }

    #[test]
    fn an_id_with_symbols_is_rejected() {
        assert_err!(SpotifyId::parse("4uLU6hMCjMI75M1A2tKUQ-"));
    }

    proptest! {
        #[test]
        fn exactly_22_alphanumerics_are_accepted(id in r"[0-9A-Za-z]{22}") {
            prop_assert!(SpotifyId::parse(&id).is_ok());
        }

        #[test]
        fn any_other_length_is_rejected(id in r"[0-9A-Za-z]{1,21}|[0-9A-Za-z]{23,40}") {
            prop_assert!(SpotifyId::parse(&id).is_err());
        }
    }
}
