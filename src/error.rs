use crate::utils;
use std::fmt;
use std::fmt::Formatter;

/// Raised synchronously at the point of an invalid setter or constructor
/// call. The offending input never reaches the assembled record.
#[derive(thiserror::Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be {max} characters or less")]
    TextTooLong { field: &'static str, max: usize },

    #[error("invalid Discord id: {0:?}")]
    InvalidDiscordId(String),

    #[error("invalid Spotify id: {0:?}")]
    InvalidSpotifyId(String),

    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),

    #[error("a rich presence can have at most 2 buttons")]
    TooManyButtons,

    #[error("a button requires both a label and a url")]
    IncompleteButton,

    #[error("name is required")]
    MissingName,

    #[error("client is not logged in")]
    NotLoggedIn,
}

impl fmt::Debug for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}
