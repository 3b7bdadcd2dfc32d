use crate::builder::BuildActivity;
use crate::error::ValidationError;
use crate::model::{PresenceData, Status};
use chrono::{DateTime, Utc};

/// Assembles the status-update payload: a status, an AFK flag, an
/// idle-since timestamp and the ordered activity list.
#[derive(Debug, Clone, Default)]
pub struct Presence {
    data: PresenceData,
}

impl Presence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: Status) {
        self.data.status = status;
    }

    pub fn set_afk(&mut self, afk: bool) {
        self.data.afk = afk;
    }

    pub fn set_idle_since(&mut self, since: DateTime<Utc>) {
        self.data.since = u64::try_from(since.timestamp_millis()).unwrap_or(0);
    }

    /// Finalizes the builder and appends its activity. Order is
    /// preserved; some clients treat the first entry as primary.
    pub fn add_activity(&mut self, activity: &impl BuildActivity) -> Result<(), ValidationError> {
        self.data.activities.push(activity.build()?);
        Ok(())
    }

    pub fn data(&self) -> &PresenceData {
        &self.data
    }

    pub fn into_data(self) -> PresenceData {
        self.data
    }
}
