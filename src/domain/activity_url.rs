use crate::error::ValidationError;
use std::fmt;
use std::fmt::{Display, Formatter};
use url::Url;

/// A well-formed absolute URL, used for the streaming URL and button
/// targets. The raw input is kept as-is rather than the normalized form,
/// since the platform receives exactly what the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityUrl(String);

impl ActivityUrl {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if Url::parse(s).is_err() {
            return Err(ValidationError::InvalidUrl(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }

    pub fn is_valid(s: &str) -> bool {
        Url::parse(s).is_ok()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ActivityUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ActivityUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
