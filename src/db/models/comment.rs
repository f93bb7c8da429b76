use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub idea_id: String,
    pub text: String,
    pub author: String,
    pub college_id: String,
    pub created_at: DateTime<Utc>,
}
