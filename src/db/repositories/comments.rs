//! Comment repository. Adding and deleting comments keeps the owning idea's
//! `comment_count` in step.

use chrono::Utc;
use uuid::Uuid;

use crate::db::{
    helpers::require,
    models::{Comment, Idea},
    repositories::scoring::COMMENT_POINTS,
    Collection, IdeaHub, RecordStore,
};
use crate::error::{Error, Result};

impl<S: RecordStore> IdeaHub<S> {
    /// Attach a comment to an existing idea, bump its `comment_count`, and
    /// award the author [`COMMENT_POINTS`].
    pub fn add_comment(
        &self,
        idea_id: &str,
        text: &str,
        author: &str,
        college_id: &str,
    ) -> Result<Comment> {
        let text = require(text, "text")?;
        let author = require(author, "author")?;
        let college_id = require(college_id, "collegeId")?;

        let mut ideas: Vec<Idea> = self.store().load(Collection::Ideas)?;
        let idea = ideas
            .iter_mut()
            .find(|i| i.id == idea_id)
            .ok_or(Error::NotFound("Idea"))?;

        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            idea_id: idea_id.to_string(),
            text,
            author,
            college_id,
            created_at: Utc::now(),
        };

        let mut comments: Vec<Comment> = self.store().load(Collection::Comments)?;
        comments.push(comment.clone());
        idea.comment_count += 1;

        self.store().save(Collection::Comments, &comments)?;
        self.store().save(Collection::Ideas, &ideas)?;

        self.award_points(&comment.college_id, COMMENT_POINTS)?;

        Ok(comment)
    }

    /// Comments on one idea, in storage order.
    pub fn comments_for_idea(&self, idea_id: &str) -> Result<Vec<Comment>> {
        let comments: Vec<Comment> = self.store().load(Collection::Comments)?;
        Ok(comments
            .into_iter()
            .filter(|c| c.idea_id == idea_id)
            .collect())
    }

    /// Remove and return a comment, decrementing the owning idea's
    /// `comment_count` (floored at 0). If the idea has since been deleted the
    /// count update is skipped.
    pub fn delete_comment(&self, comment_id: &str) -> Result<Comment> {
        let mut comments: Vec<Comment> = self.store().load(Collection::Comments)?;
        let position = comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(Error::NotFound("Comment"))?;

        let removed = comments.remove(position);
        self.store().save(Collection::Comments, &comments)?;

        let mut ideas: Vec<Idea> = self.store().load(Collection::Ideas)?;
        if let Some(idea) = ideas.iter_mut().find(|i| i.id == removed.idea_id) {
            idea.comment_count = (idea.comment_count - 1).max(0);
            self.store().save(Collection::Ideas, &ideas)?;
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::NewIdea;
    use crate::db::MemoryStore;

    fn hub_with_idea() -> (IdeaHub<MemoryStore>, Idea) {
        let hub = IdeaHub::new(MemoryStore::new());
        let idea = hub
            .create_idea(NewIdea {
                title: "Solar charger".to_string(),
                description: "a description".to_string(),
                author: "Asha".to_string(),
                college_id: "C100".to_string(),
                ..NewIdea::default()
            })
            .unwrap();
        (hub, idea)
    }

    #[test]
    fn add_then_delete_restores_comment_count() {
        let (hub, idea) = hub_with_idea();

        let comment = hub
            .add_comment(&idea.id, "nice one", "Ben", "C200")
            .unwrap();
        assert_eq!(hub.idea_by_id(&idea.id).unwrap().comment_count, 1);

        hub.delete_comment(&comment.id).unwrap();
        assert_eq!(hub.idea_by_id(&idea.id).unwrap().comment_count, 0);
        assert!(hub.comments_for_idea(&idea.id).unwrap().is_empty());
    }

    #[test]
    fn add_awards_commenter_when_registered() {
        let (hub, idea) = hub_with_idea();
        hub.upsert_student("Ben", "C200", None, None).unwrap();

        hub.add_comment(&idea.id, "nice one", "Ben", "C200").unwrap();

        assert_eq!(
            hub.student_by_college_id("C200").unwrap().points,
            COMMENT_POINTS
        );
    }

    #[test]
    fn add_rejects_missing_fields_and_unknown_idea() {
        let (hub, idea) = hub_with_idea();

        assert!(matches!(
            hub.add_comment(&idea.id, "", "Ben", "C200"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            hub.add_comment(&idea.id, "text", "", "C200"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            hub.add_comment("no-such-idea", "text", "Ben", "C200"),
            Err(Error::NotFound("Idea"))
        ));
    }

    #[test]
    fn delete_survives_orphaned_comment() {
        let (hub, idea) = hub_with_idea();
        let comment = hub
            .add_comment(&idea.id, "nice one", "Ben", "C200")
            .unwrap();

        // Deleting the idea leaves the comment orphaned by design.
        hub.delete_idea(&idea.id).unwrap();
        let removed = hub.delete_comment(&comment.id).unwrap();

        assert_eq!(removed.id, comment.id);
    }

    #[test]
    fn count_never_goes_below_zero() {
        let (hub, idea) = hub_with_idea();
        let comment = hub
            .add_comment(&idea.id, "nice one", "Ben", "C200")
            .unwrap();

        // Simulate a document whose count already drifted to zero.
        let mut ideas: Vec<Idea> = hub.store().load(Collection::Ideas).unwrap();
        ideas[0].comment_count = 0;
        hub.store().save(Collection::Ideas, &ideas).unwrap();

        hub.delete_comment(&comment.id).unwrap();
        assert_eq!(hub.idea_by_id(&idea.id).unwrap().comment_count, 0);
    }
}
