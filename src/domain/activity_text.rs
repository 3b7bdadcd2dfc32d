use crate::error::ValidationError;
use std::fmt;
use std::fmt::{Display, Formatter};
use unicode_segmentation::UnicodeSegmentation;

/// Maximum length Discord accepts for name, state, details and asset text.
pub const MAX_TEXT_LEN: usize = 128;

/// A free-form presence text field: name, state, details, large text or
/// small text. Discord caps each of these at 128 characters. The input is
/// stored exactly as given, including surrounding whitespace, since it is
/// displayed verbatim in the presence UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityText(String);

impl ActivityText {
    /// Returns an instance of `ActivityText` if the input fits the length
    /// cap. `field` names the target field in the error.
    pub fn parse(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        if s.graphemes(true).count() > MAX_TEXT_LEN {
            return Err(ValidationError::TextTooLong {
                field,
                max: MAX_TEXT_LEN,
            });
        }

        Ok(Self(s.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ActivityText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ActivityText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
