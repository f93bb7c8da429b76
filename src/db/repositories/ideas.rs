//! Idea repository: creation, listing with sort orders, partial update,
//! deletion, and upvote toggling.

use chrono::Utc;
use uuid::Uuid;

use crate::db::{
    helpers::{non_empty, require},
    models::{Idea, IdeaPatch, IdeaSort, NewIdea},
    repositories::scoring::{IDEA_POINTS, UPVOTE_POINTS},
    Collection, IdeaHub, RecordStore,
};
use crate::error::{Error, Result};

impl<S: RecordStore> IdeaHub<S> {
    /// Submit a new idea and award the author [`IDEA_POINTS`].
    pub fn create_idea(&self, new: NewIdea) -> Result<Idea> {
        let title = require(&new.title, "title")?;
        let description = require(&new.description, "description")?;
        let author = require(&new.author, "author")?;
        let college_id = require(&new.college_id, "collegeId")?;

        let now = Utc::now();
        let idea = Idea {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            category: non_empty(new.category).unwrap_or_else(|| "other".to_string()),
            need_collab: new.need_collab.unwrap_or(false),
            author,
            college_id,
            section: new.section,
            branch: new.branch,
            upvotes: 0,
            upvoters: Vec::new(),
            comment_count: 0,
            points: IDEA_POINTS,
            created_at: now,
            updated_at: now,
        };

        let mut ideas: Vec<Idea> = self.store().load(Collection::Ideas)?;
        ideas.push(idea.clone());
        self.store().save(Collection::Ideas, &ideas)?;

        self.award_points(&idea.college_id, IDEA_POINTS)?;

        Ok(idea)
    }

    /// All ideas in the requested order. Sorts are stable, so ties keep the
    /// underlying storage order.
    pub fn list_ideas(&self, sort: IdeaSort) -> Result<Vec<Idea>> {
        let mut ideas: Vec<Idea> = self.store().load(Collection::Ideas)?;

        match sort {
            IdeaSort::Recent => ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            IdeaSort::Trending => ideas.sort_by(|a, b| b.upvotes.cmp(&a.upvotes)),
            IdeaSort::Popular => ideas.sort_by(|a, b| b.comment_count.cmp(&a.comment_count)),
        }

        Ok(ideas)
    }

    pub fn idea_by_id(&self, id: &str) -> Result<Idea> {
        let ideas: Vec<Idea> = self.store().load(Collection::Ideas)?;
        ideas
            .into_iter()
            .find(|i| i.id == id)
            .ok_or(Error::NotFound("Idea"))
    }

    /// Ideas owned by the given collegeId, in storage order.
    pub fn ideas_by_author(&self, college_id: &str) -> Result<Vec<Idea>> {
        let ideas: Vec<Idea> = self.store().load(Collection::Ideas)?;
        Ok(ideas
            .into_iter()
            .filter(|i| i.college_id == college_id)
            .collect())
    }

    /// Apply the provided fields (empty strings are ignored) and refresh
    /// `updated_at` unconditionally.
    pub fn update_idea(&self, id: &str, patch: IdeaPatch) -> Result<Idea> {
        let mut ideas: Vec<Idea> = self.store().load(Collection::Ideas)?;
        let idea = ideas
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(Error::NotFound("Idea"))?;

        if let Some(title) = non_empty(patch.title) {
            idea.title = title;
        }
        if let Some(description) = non_empty(patch.description) {
            idea.description = description;
        }
        if let Some(category) = non_empty(patch.category) {
            idea.category = category;
        }
        idea.updated_at = Utc::now();

        let updated = idea.clone();
        self.store().save(Collection::Ideas, &ideas)?;

        Ok(updated)
    }

    /// Remove and return an idea. Comments and collaborations that reference
    /// it are intentionally left behind.
    pub fn delete_idea(&self, id: &str) -> Result<Idea> {
        let mut ideas: Vec<Idea> = self.store().load(Collection::Ideas)?;
        let position = ideas
            .iter()
            .position(|i| i.id == id)
            .ok_or(Error::NotFound("Idea"))?;

        let removed = ideas.remove(position);
        self.store().save(Collection::Ideas, &ideas)?;

        Ok(removed)
    }

    /// Toggle an upvote for `college_id`. Adding awards [`UPVOTE_POINTS`];
    /// removing does not revoke them.
    pub fn toggle_upvote(&self, id: &str, college_id: &str) -> Result<Idea> {
        let mut ideas: Vec<Idea> = self.store().load(Collection::Ideas)?;
        let idea = ideas
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(Error::NotFound("Idea"))?;

        let already_upvoted = idea.upvoters.iter().position(|v| v == college_id);
        match already_upvoted {
            Some(position) => {
                idea.upvoters.remove(position);
                idea.upvotes -= 1;
            }
            None => {
                idea.upvoters.push(college_id.to_string());
                idea.upvotes += 1;
            }
        }

        let updated = idea.clone();
        self.store().save(Collection::Ideas, &ideas)?;

        if already_upvoted.is_none() {
            self.award_points(college_id, UPVOTE_POINTS)?;
        }

        Ok(updated)
    }
}
