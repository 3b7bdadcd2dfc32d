use crate::domain::{ActivityText, DiscordId, ImageRef};
use crate::error::ValidationError;
use crate::model::Activity;
use chrono::{DateTime, Utc};

/// Finalizes a builder into the record handed to the session. Building
/// clones the accumulated state, so later setter calls never mutate a
/// record that has already been handed over.
pub trait BuildActivity {
    fn build(&self) -> Result<Activity, ValidationError>;
}

/// The field set shared by the rich-presence variants, composed into each
/// of them rather than inherited.
#[derive(Debug, Clone, Default)]
pub struct BaseActivity {
    activity: Activity,
}

impl BaseActivity {
    pub(crate) fn from_activity(activity: Activity) -> Self {
        Self { activity }
    }

    pub(crate) fn activity_mut(&mut self) -> &mut Activity {
        &mut self.activity
    }

    pub(crate) fn finish(&self) -> Result<Activity, ValidationError> {
        if self.activity.name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        Ok(self.activity.clone())
    }
}

/// Setters for the shared base fields, provided to every variant that
/// exposes its [`BaseActivity`].
pub trait ActivityFields {
    fn base_mut(&mut self) -> &mut BaseActivity;

    fn set_application_id(&mut self, id: &str) -> Result<(), ValidationError> {
        let id = DiscordId::parse(id)?;
        self.base_mut().activity_mut().application_id = Some(id.into_inner());
        Ok(())
    }

    fn set_state(&mut self, state: &str) -> Result<(), ValidationError> {
        let state = ActivityText::parse("state", state)?;
        self.base_mut().activity_mut().state = Some(state.into_inner());
        Ok(())
    }

    fn set_details(&mut self, details: &str) -> Result<(), ValidationError> {
        let details = ActivityText::parse("details", details)?;
        self.base_mut().activity_mut().details = Some(details.into_inner());
        Ok(())
    }

    fn set_large_image(&mut self, image: &str) {
        let image = ImageRef::resolve(image);
        self.base_mut().activity_mut().assets.large_image_id = Some(image.into_inner());
    }

    fn set_large_text(&mut self, text: &str) -> Result<(), ValidationError> {
        let text = ActivityText::parse("large text", text)?;
        self.base_mut().activity_mut().assets.large_text = Some(text.into_inner());
        Ok(())
    }

    fn set_small_image(&mut self, image: &str) {
        let image = ImageRef::resolve(image);
        self.base_mut().activity_mut().assets.small_image_id = Some(image.into_inner());
    }

    fn set_small_text(&mut self, text: &str) -> Result<(), ValidationError> {
        let text = ActivityText::parse("small text", text)?;
        self.base_mut().activity_mut().assets.small_text = Some(text.into_inner());
        Ok(())
    }

    fn set_start_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.base_mut().activity_mut().timestamps.start = Some(timestamp.timestamp_millis());
    }

    fn set_end_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.base_mut().activity_mut().timestamps.end = Some(timestamp.timestamp_millis());
    }
}
