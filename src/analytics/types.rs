//! Serializable shapes returned by the analytics reader.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_ideas: usize,
    pub total_students: usize,
    pub total_upvotes: i64,
    pub total_comments: usize,
    pub pending_collaborations: usize,
    pub approved_collaborations: usize,
    /// Rounded to two decimal places; 0 when there are no ideas.
    pub avg_upvotes_per_idea: f64,
    pub total_points_awarded: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopAuthor {
    pub author: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingIdea {
    pub id: String,
    pub title: String,
    pub author: String,
    pub upvotes: i64,
    pub comments: i64,
}

/// Human-labeled idea projection for bulk export.
#[derive(Debug, Clone, Serialize)]
pub struct IdeaExport {
    #[serde(rename = "Idea Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Author Name")]
    pub author: String,
    #[serde(rename = "College ID")]
    pub college_id: String,
    #[serde(rename = "Section")]
    pub section: Option<String>,
    #[serde(rename = "Branch")]
    pub branch: Option<String>,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Upvotes")]
    pub upvotes: i64,
    #[serde(rename = "Comments")]
    pub comments: i64,
    #[serde(rename = "Collaboration Needed")]
    pub collaboration_needed: &'static str,
    #[serde(rename = "Created Date")]
    pub created_date: DateTime<Utc>,
}

/// Human-labeled student projection with per-student idea roll-ups.
#[derive(Debug, Clone, Serialize)]
pub struct StudentExport {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "College ID")]
    pub college_id: String,
    #[serde(rename = "Section")]
    pub section: Option<String>,
    #[serde(rename = "Branch")]
    pub branch: Option<String>,
    #[serde(rename = "Points")]
    pub points: i64,
    #[serde(rename = "Ideas Posted")]
    pub ideas_posted: usize,
    #[serde(rename = "Total Upvotes Received")]
    pub total_upvotes_received: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub ideas: Vec<IdeaExport>,
    pub students: Vec<StudentExport>,
}

/// Liveness payload for callers exposing a health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}
