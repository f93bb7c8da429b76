//! Idea data model plus the request/patch types callers submit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_category() -> String {
    "other".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub need_collab: bool,
    /// Display name of the submitter, distinct from the owning `college_id`.
    pub author: String,
    pub college_id: String,
    pub section: Option<String>,
    pub branch: Option<String>,
    #[serde(default)]
    pub upvotes: i64,
    /// College ids that currently upvote this idea; duplicate-free.
    #[serde(default)]
    pub upvoters: Vec<String>,
    /// Must equal the number of live comments referencing this idea.
    #[serde(default)]
    pub comment_count: i64,
    /// Fixed base value assigned at creation; not mutated afterwards.
    #[serde(default)]
    pub points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when submitting a new idea.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdea {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub need_collab: Option<bool>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub college_id: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

/// Partial update for an idea; absent or empty fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Sort orders for the idea listing. Unknown query values fall back to
/// `Recent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaSort {
    #[default]
    Recent,
    Trending,
    Popular,
}

impl IdeaSort {
    pub fn parse(value: &str) -> Self {
        match value {
            "trending" => IdeaSort::Trending,
            "popular" => IdeaSort::Popular,
            _ => IdeaSort::Recent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_parse_falls_back_to_recent() {
        assert_eq!(IdeaSort::parse("trending"), IdeaSort::Trending);
        assert_eq!(IdeaSort::parse("popular"), IdeaSort::Popular);
        assert_eq!(IdeaSort::parse("recent"), IdeaSort::Recent);
        assert_eq!(IdeaSort::parse("nonsense"), IdeaSort::Recent);
    }

    #[test]
    fn partial_document_fills_counter_defaults() {
        // A document written before the upvote feature existed.
        let idea: Idea = serde_json::from_str(
            r#"{
                "id": "i1",
                "title": "t",
                "description": "d",
                "author": "a",
                "collegeId": "C1",
                "section": null,
                "branch": null,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(idea.category, "other");
        assert!(!idea.need_collab);
        assert_eq!(idea.upvotes, 0);
        assert!(idea.upvoters.is_empty());
        assert_eq!(idea.comment_count, 0);
    }
}
