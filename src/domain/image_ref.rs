use crate::domain::{ActivityUrl, DiscordId};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Scheme tags the platform already understands; tokens carrying one are
/// left untouched.
const MEDIA_SCHEMES: [&str; 4] = ["mp:", "youtube:", "spotify:", "twitch:"];

/// Discord CDN origins whose URLs can be rewritten to the media-proxy
/// scheme.
const DISCORD_CDNS: [&str; 4] = [
    "https://cdn.discordapp.com/",
    "http://cdn.discordapp.com/",
    "https://media.discordapp.net/",
    "http://media.discordapp.net/",
];

/// A normalized image reference for activity assets.
///
/// Resolution is best-effort and never fails: asset-library ids and
/// already-tagged references pass through, `external/` paths and Discord
/// CDN links are rewritten to the `mp:` media-proxy form, and anything
/// else is treated as an opaque external URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn resolve(image: &str) -> Self {
        if DiscordId::is_valid(image) {
            return Self(image.to_string());
        }

        if MEDIA_SCHEMES.iter().any(|scheme| image.starts_with(scheme)) {
            return Self(image.to_string());
        }

        if image.starts_with("external/") {
            return Self(format!("mp:{image}"));
        }

        if ActivityUrl::is_valid(image) {
            for cdn in DISCORD_CDNS {
                if let Some(path) = image.strip_prefix(cdn) {
                    tracing::debug!("rewriting CDN image link to media proxy: {image}");
                    return Self(format!("mp:{path}"));
                }
            }
        }

        Self(image.to_string())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
