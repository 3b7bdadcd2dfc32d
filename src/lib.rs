//! Validating builders for Discord presence updates.
//!
//! Assembles custom-status, rich-presence and Spotify activities into the
//! opcode-3 payload a session transmits, rejecting oversized text,
//! malformed ids and malformed URLs at the point of assignment.

pub mod assets;
pub mod builder;
pub mod domain;
pub mod error;
pub mod model;
pub mod session;
pub mod utils;

pub use assets::{resolve_image_link, AssetError};
pub use builder::{
    ActivityFields, BuildActivity, CustomStatus, Presence, RichPresence, SpotifyPresence,
};
pub use error::ValidationError;
pub use model::{Activity, ActivityType, PresenceData, Status};
pub use session::{CurrentUser, ExternalAsset, Session, SessionError};
