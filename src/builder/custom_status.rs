use crate::builder::BuildActivity;
use crate::domain::{ActivityEmoji, ActivityText};
use crate::error::ValidationError;
use crate::model::{Activity, ActivityType};
use crate::session::Session;

/// Builder for a custom status: the free-text line (plus optional emoji)
/// shown under the user's name. The activity name is fixed by the
/// platform and not settable.
#[derive(Debug, Clone)]
pub struct CustomStatus {
    activity: Activity,
}

impl CustomStatus {
    /// Fails with [`ValidationError::NotLoggedIn`] until the session has
    /// an established identity.
    pub fn new(session: &impl Session) -> Result<Self, ValidationError> {
        if session.current_user().is_none() {
            return Err(ValidationError::NotLoggedIn);
        }

        Ok(Self {
            activity: Activity {
                name: "Custom Status".to_string(),
                activity_type: ActivityType::Custom,
                ..Activity::default()
            },
        })
    }

    pub fn set_state(&mut self, state: &str) -> Result<(), ValidationError> {
        let state = ActivityText::parse("state", state)?;
        self.activity.state = Some(state.into_inner());
        Ok(())
    }

    /// Best-effort; any input resolves to some emoji reference.
    pub fn set_emoji(&mut self, emoji: &str) {
        self.activity.emoji = Some(ActivityEmoji::parse(emoji));
    }
}

impl BuildActivity for CustomStatus {
    fn build(&self) -> Result<Activity, ValidationError> {
        Ok(self.activity.clone())
    }
}
