//! Read-only aggregate views over the current collection snapshots.
//!
//! Nothing here mutates: every method re-reads the collections it needs and
//! computes its answer in memory, the same load cost profile as the
//! repositories.

mod types;

pub use types::{
    ExportData, Health, IdeaExport, Overview, StudentExport, TopAuthor, TrendingIdea,
};

use std::collections::BTreeMap;

use chrono::Utc;

use crate::db::{
    models::{CollabStatus, Collaboration, Comment, Idea, Student},
    Collection, IdeaHub, RecordStore,
};
use crate::error::Result;

const DEFAULT_LIMIT: usize = 10;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub struct Analytics<'a, S: RecordStore> {
    hub: &'a IdeaHub<S>,
}

impl<S: RecordStore> IdeaHub<S> {
    pub fn analytics(&self) -> Analytics<'_, S> {
        Analytics { hub: self }
    }
}

impl<S: RecordStore> Analytics<'_, S> {
    /// The dashboard headline numbers.
    pub fn overview(&self) -> Result<Overview> {
        let ideas: Vec<Idea> = self.hub.store().load(Collection::Ideas)?;
        let students: Vec<Student> = self.hub.store().load(Collection::Students)?;
        let comments: Vec<Comment> = self.hub.store().load(Collection::Comments)?;
        let collaborations: Vec<Collaboration> =
            self.hub.store().load(Collection::Collaborations)?;

        let total_upvotes: i64 = ideas.iter().map(|i| i.upvotes).sum();
        let avg_upvotes_per_idea = if ideas.is_empty() {
            0.0
        } else {
            round2(total_upvotes as f64 / ideas.len() as f64)
        };

        Ok(Overview {
            total_ideas: ideas.len(),
            total_students: students.len(),
            total_upvotes,
            total_comments: comments.len(),
            pending_collaborations: collaborations
                .iter()
                .filter(|c| c.status == CollabStatus::Pending)
                .count(),
            approved_collaborations: collaborations
                .iter()
                .filter(|c| c.status == CollabStatus::Approved)
                .count(),
            avg_upvotes_per_idea,
            total_points_awarded: students.iter().map(|s| s.points).sum(),
        })
    }

    /// Idea counts per category; an empty category counts as "other".
    pub fn by_category(&self) -> Result<BTreeMap<String, usize>> {
        let ideas: Vec<Idea> = self.hub.store().load(Collection::Ideas)?;

        let mut categories = BTreeMap::new();
        for idea in &ideas {
            let category = if idea.category.is_empty() {
                "other"
            } else {
                &idea.category
            };
            *categories.entry(category.to_string()).or_insert(0) += 1;
        }

        Ok(categories)
    }

    /// Idea counts per branch; a missing branch counts as "Unknown".
    pub fn by_branch(&self) -> Result<BTreeMap<String, usize>> {
        let ideas: Vec<Idea> = self.hub.store().load(Collection::Ideas)?;

        let mut branches = BTreeMap::new();
        for idea in &ideas {
            let branch = match idea.branch.as_deref() {
                Some(branch) if !branch.is_empty() => branch,
                _ => "Unknown",
            };
            *branches.entry(branch.to_string()).or_insert(0) += 1;
        }

        Ok(branches)
    }

    /// Authors ranked by number of ideas posted. Grouping is by exact author
    /// string, not collegeId; ties keep first-encounter order.
    pub fn top_authors(&self, limit: Option<usize>) -> Result<Vec<TopAuthor>> {
        let ideas: Vec<Idea> = self.hub.store().load(Collection::Ideas)?;

        let mut authors: Vec<TopAuthor> = Vec::new();
        for idea in &ideas {
            match authors.iter_mut().find(|a| a.author == idea.author) {
                Some(entry) => entry.count += 1,
                None => authors.push(TopAuthor {
                    author: idea.author.clone(),
                    count: 1,
                }),
            }
        }

        authors.sort_by(|a, b| b.count.cmp(&a.count));
        authors.truncate(limit.unwrap_or(DEFAULT_LIMIT));

        Ok(authors)
    }

    /// Ideas ranked by upvotes, projected to the trending card shape.
    pub fn trending(&self, limit: Option<usize>) -> Result<Vec<TrendingIdea>> {
        let mut ideas: Vec<Idea> = self.hub.store().load(Collection::Ideas)?;
        ideas.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
        ideas.truncate(limit.unwrap_or(DEFAULT_LIMIT));

        Ok(ideas
            .into_iter()
            .map(|idea| TrendingIdea {
                id: idea.id,
                title: idea.title,
                author: idea.author,
                upvotes: idea.upvotes,
                comments: idea.comment_count,
            })
            .collect())
    }

    /// Flattened, human-labeled projections of the idea and student
    /// collections for bulk export.
    pub fn export_all(&self) -> Result<ExportData> {
        let ideas: Vec<Idea> = self.hub.store().load(Collection::Ideas)?;
        let students: Vec<Student> = self.hub.store().load(Collection::Students)?;

        let students = students
            .into_iter()
            .map(|student| {
                let owned: Vec<&Idea> = ideas
                    .iter()
                    .filter(|i| i.college_id == student.college_id)
                    .collect();
                StudentExport {
                    name: student.name,
                    college_id: student.college_id,
                    section: student.section,
                    branch: student.branch,
                    points: student.points,
                    ideas_posted: owned.len(),
                    total_upvotes_received: owned.iter().map(|i| i.upvotes).sum(),
                }
            })
            .collect();

        let ideas = ideas
            .into_iter()
            .map(|idea| IdeaExport {
                title: idea.title,
                description: idea.description,
                author: idea.author,
                college_id: idea.college_id,
                section: idea.section,
                branch: idea.branch,
                category: idea.category,
                upvotes: idea.upvotes,
                comments: idea.comment_count,
                collaboration_needed: if idea.need_collab { "Yes" } else { "No" },
                created_date: idea.created_at,
            })
            .collect();

        Ok(ExportData { ideas, students })
    }

    /// Trivial liveness payload.
    pub fn health(&self) -> Health {
        Health {
            status: "ok",
            timestamp: Utc::now(),
        }
    }
}
