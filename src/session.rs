use crate::domain::DiscordId;

/// Opaque failure from the session's transport; this layer wraps it
/// without interpreting it.
pub type SessionError = Box<dyn std::error::Error + Send + Sync>;

/// The identity the session is logged in as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: DiscordId,
}

/// One resolved entry from an external-asset lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalAsset {
    pub url: String,
    pub external_asset_path: String,
}

/// The seam to the underlying Discord client. The builders only need to
/// know whether an identity is established and how to translate external
/// image URLs into asset paths; transport, gateway protocol and wire
/// encoding all live behind this trait.
pub trait Session {
    fn current_user(&self) -> Option<&CurrentUser>;

    /// Asks the platform to register the given image URLs for the
    /// application and return their media-proxy asset paths.
    fn external_assets(
        &self,
        application_id: &DiscordId,
        image_urls: &[String],
    ) -> Result<Vec<ExternalAsset>, SessionError>;
}
