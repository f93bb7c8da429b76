//! Student data model.
//!
//! Students are keyed externally by `college_id` (caller-supplied); the `id`
//! uuid exists only so every record carries a collection-unique identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub college_id: String,
    pub section: Option<String>,
    pub branch: Option<String>,
    /// Accumulated award points. Mutated only through the scoring path.
    #[serde(default)]
    pub points: i64,
    /// Placeholder for a future badge system; always empty today.
    #[serde(default)]
    pub badges: Vec<String>,
    pub created_at: DateTime<Utc>,
}
