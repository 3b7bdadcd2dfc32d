use crate::domain::ActivityEmoji;
use serde::Serialize;
use serde_repr::Serialize_repr;

/// Wire value of the activity `type` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum ActivityType {
    #[default]
    Game = 0,
    Streaming = 1,
    Listening = 2,
    Custom = 4,
    Competing = 5,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Timestamps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl Timestamps {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assets {
    #[serde(rename = "large_image", skip_serializing_if = "Option::is_none")]
    pub large_image_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_text: Option<String>,

    #[serde(rename = "small_image", skip_serializing_if = "Option::is_none")]
    pub small_image_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_text: Option<String>,
}

impl Assets {
    pub fn is_empty(&self) -> bool {
        self.large_image_id.is_none()
            && self.large_text.is_none()
            && self.small_image_id.is_none()
            && self.small_text.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Party {
    pub id: String,

    /// `[current, max]` member counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<[u32; 2]>,
}

/// Platform-specific keys the gateway passes through untouched: Spotify
/// track context and the URLs backing rich-presence buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityMetadata {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub button_urls: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artist_ids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
}

impl ActivityMetadata {
    pub fn is_empty(&self) -> bool {
        self.button_urls.is_empty()
            && self.album_id.is_none()
            && self.artist_ids.is_empty()
            && self.context_uri.is_none()
    }
}

/// A single entry of the presence `activities` array, transmitted verbatim
/// by the session. Built through the builders in [`crate::builder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    /// Only valid when `activity_type` is `Streaming`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ActivityEmoji>,

    #[serde(skip_serializing_if = "Timestamps::is_empty")]
    pub timestamps: Timestamps,

    #[serde(skip_serializing_if = "Assets::is_empty")]
    pub assets: Assets,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,

    /// Spotify track id the client uses to sync playback position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,

    /// Button labels; the URLs travel in `metadata.button_urls` at the
    /// same indices.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<String>,

    #[serde(skip_serializing_if = "ActivityMetadata::is_empty")]
    pub metadata: ActivityMetadata,
}
