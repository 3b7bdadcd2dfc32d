mod activity_text;
mod activity_url;
mod button_label;
mod discord_id;
mod emoji;
mod image_ref;
mod spotify_id;

pub use activity_text::ActivityText;
pub use activity_url::ActivityUrl;
pub use button_label::ButtonLabel;
pub use discord_id::DiscordId;
pub use emoji::ActivityEmoji;
pub use image_ref::ImageRef;
pub use spotify_id::SpotifyId;
