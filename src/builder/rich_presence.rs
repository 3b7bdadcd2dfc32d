use crate::builder::{ActivityFields, BaseActivity, BuildActivity};
use crate::domain::{ActivityText, ActivityUrl, ButtonLabel};
use crate::error::ValidationError;
use crate::model::{Activity, ActivityType, Party};
use crate::session::Session;

/// Discord renders at most two buttons per activity.
pub const MAX_BUTTONS: usize = 2;

/// Builder for a generic rich presence. A non-empty name is required
/// before the activity can be built; everything else is optional.
#[derive(Debug, Clone)]
pub struct RichPresence {
    base: BaseActivity,
}

impl RichPresence {
    pub fn new(session: &impl Session) -> Result<Self, ValidationError> {
        if session.current_user().is_none() {
            return Err(ValidationError::NotLoggedIn);
        }

        Ok(Self {
            base: BaseActivity::default(),
        })
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        let name = ActivityText::parse("name", name)?;
        self.base.activity_mut().name = name.into_inner();
        Ok(())
    }

    pub fn set_activity_type(&mut self, activity_type: ActivityType) {
        self.base.activity_mut().activity_type = activity_type;
    }

    /// Shown only for `Streaming` activities.
    pub fn set_url(&mut self, url: &str) -> Result<(), ValidationError> {
        let url = ActivityUrl::parse(url)?;
        self.base.activity_mut().url = Some(url.into_inner());
        Ok(())
    }

    pub fn set_party(&mut self, id: &str, current_members: u32, max_members: u32) {
        self.base.activity_mut().party = Some(Party {
            id: id.to_string(),
            size: Some([current_members, max_members]),
        });
    }

    /// Appends a button; the label lands in `buttons` and the url in
    /// `metadata.button_urls` at the same index. The count check runs
    /// before any argument validation.
    pub fn add_button(&mut self, label: &str, url: &str) -> Result<(), ValidationError> {
        if self.base.activity_mut().buttons.len() >= MAX_BUTTONS {
            return Err(ValidationError::TooManyButtons);
        }

        if url.is_empty() {
            return Err(ValidationError::IncompleteButton);
        }

        let label = ButtonLabel::parse(label)?;
        let url = ActivityUrl::parse(url)?;

        let activity = self.base.activity_mut();
        activity.buttons.push(label.into_inner());
        activity.metadata.button_urls.push(url.into_inner());
        Ok(())
    }
}

impl ActivityFields for RichPresence {
    fn base_mut(&mut self) -> &mut BaseActivity {
        &mut self.base
    }
}

impl BuildActivity for RichPresence {
    fn build(&self) -> Result<Activity, ValidationError> {
        self.base.finish()
    }
}
