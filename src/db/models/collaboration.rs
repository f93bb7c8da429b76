use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollabStatus {
    Pending,
    Approved,
    Rejected,
}

impl CollabStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CollabStatus::Pending => "pending",
            CollabStatus::Approved => "approved",
            CollabStatus::Rejected => "rejected",
        }
    }

    /// Parse a caller-supplied status string. Anything outside the three
    /// known values is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(CollabStatus::Pending),
            "approved" => Some(CollabStatus::Approved),
            "rejected" => Some(CollabStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaboration {
    pub id: String,
    /// Not validated against the ideas collection at request time.
    pub idea_id: String,
    pub requester_name: String,
    pub requester_college_id: String,
    pub reason: String,
    pub status: CollabStatus,
    pub created_at: DateTime<Utc>,
    /// Stamped on every status update, including repeated ones.
    pub response_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_round_trips_known_values() {
        for status in [
            CollabStatus::Pending,
            CollabStatus::Approved,
            CollabStatus::Rejected,
        ] {
            assert_eq!(CollabStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CollabStatus::parse("accepted"), None);
        assert_eq!(CollabStatus::parse(""), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CollabStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
