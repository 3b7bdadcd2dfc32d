use crate::builder::{ActivityFields, BaseActivity, BuildActivity};
use crate::domain::SpotifyId;
use crate::error::ValidationError;
use crate::model::{Activity, ActivityType, Party};
use crate::session::Session;

/// Flag bits Discord sets on Spotify activities (SYNC | PLAY).
const SPOTIFY_FLAGS: u64 = 48;

/// Builder for a Spotify listening presence. Name, type, flags and the
/// identity-derived party id are preset; the track, album and artist ids
/// must all be 22-character Spotify catalog ids.
#[derive(Debug, Clone)]
pub struct SpotifyPresence {
    base: BaseActivity,
}

impl SpotifyPresence {
    pub fn new(session: &impl Session) -> Result<Self, ValidationError> {
        let user = session.current_user().ok_or(ValidationError::NotLoggedIn)?;

        let activity = Activity {
            id: Some("spotify:1".to_string()),
            name: "Spotify".to_string(),
            activity_type: ActivityType::Listening,
            flags: Some(SPOTIFY_FLAGS),
            party: Some(Party {
                id: format!("spotify:{}", user.id),
                size: None,
            }),
            ..Activity::default()
        };

        Ok(Self {
            base: BaseActivity::from_activity(activity),
        })
    }

    pub fn set_track_id(&mut self, id: &str) -> Result<(), ValidationError> {
        let id = SpotifyId::parse(id)?;
        self.base.activity_mut().sync_id = Some(id.into_inner());
        Ok(())
    }

    /// Also derives the canonical `spotify:album:<id>` context URI.
    pub fn set_album_id(&mut self, id: &str) -> Result<(), ValidationError> {
        let id = SpotifyId::parse(id)?;

        let metadata = &mut self.base.activity_mut().metadata;
        metadata.context_uri = Some(format!("spotify:album:{id}"));
        metadata.album_id = Some(id.into_inner());
        Ok(())
    }

    /// Append-only; tracks routinely credit several artists.
    pub fn add_artist_id(&mut self, id: &str) -> Result<(), ValidationError> {
        let id = SpotifyId::parse(id)?;
        self.base.activity_mut().metadata.artist_ids.push(id.into_inner());
        Ok(())
    }
}

impl ActivityFields for SpotifyPresence {
    fn base_mut(&mut self) -> &mut BaseActivity {
        &mut self.base
    }
}

impl BuildActivity for SpotifyPresence {
    fn build(&self) -> Result<Activity, ValidationError> {
        self.base.finish()
    }
}
