use crate::error::ValidationError;
use std::fmt;
use std::fmt::{Display, Formatter};
use unicode_segmentation::UnicodeSegmentation;

/// Maximum length Discord accepts for a button label.
pub const MAX_LABEL_LEN: usize = 31;

/// The visible label of a rich-presence button. Must be non-empty and at
/// most 31 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabel(String);

impl ButtonLabel {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::IncompleteButton);
        }

        if s.graphemes(true).count() > MAX_LABEL_LEN {
            return Err(ValidationError::TextTooLong {
                field: "button label",
                max: MAX_LABEL_LEN,
            });
        }

        Ok(Self(s.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ButtonLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ButtonLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::ButtonLabel;
    use claims::{assert_err, assert_ok};
    use proptest::prelude::*;

    #[test]
    fn a_31_character_label_is_valid() {
        assert_ok!(ButtonLabel::parse(&"a".repeat(31)));
    }

    #[test]
    fn a_32_character_label_is_rejected() {
        assert_err!(ButtonLabel::parse(&"a".repeat(32)));
    }

    #[test]
    fn an_empty_label_is_rejected() {
        assert_err!(ButtonLabel::parse(""));
    }

    proptest! {
        #[test]
        fn labels_from_1_to_31_characters_are_accepted(label in r"[a-zA-Z0-9 ]{1,31}") {
            prop_assert!(ButtonLabel::parse(&label).is_ok());
        }

        #[test]
        fn labels_longer_than_31_characters_are_rejected(label in r"[a-zA-Z0-9]{32,64}") {
            prop_assert!(ButtonLabel::parse(&label).is_err());
        }
    }
}
