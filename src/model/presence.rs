use crate::model::Activity;
use serde::Serialize;

/// Online-status value of a presence update, lowercase on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Online,
    Idle,
    Dnd,
    Invisible,
}

/// Body of a status-update broadcast (gateway opcode 3). The session
/// encodes and transmits this verbatim; clients treat the first activity
/// as primary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PresenceData {
    /// Unix milliseconds since the client went idle; 0 when not idle.
    pub since: u64,

    pub activities: Vec<Activity>,

    pub status: Status,

    pub afk: bool,
}

#[cfg(test)]
mod tests {
    use super::{PresenceData, Status};

    #[test]
    fn the_status_serializes_as_a_lowercase_string() {
        let data = PresenceData {
            status: Status::Dnd,
            ..PresenceData::default()
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["status"], serde_json::json!("dnd"));
    }

    #[test]
    fn the_default_presence_is_online_not_afk_and_empty() {
        let json = serde_json::to_value(PresenceData::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "since": 0,
                "activities": [],
                "status": "online",
                "afk": false,
            })
        );
    }
}
