mod base;
mod custom_status;
mod presence;
mod rich_presence;
mod spotify;

pub use base::{ActivityFields, BaseActivity, BuildActivity};
pub use custom_status::CustomStatus;
pub use presence::Presence;
pub use rich_presence::RichPresence;
pub use spotify::SpotifyPresence;
