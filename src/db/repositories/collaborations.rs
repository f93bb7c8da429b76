//! Collaboration request repository.

use chrono::Utc;
use uuid::Uuid;

use crate::db::{
    helpers::require,
    models::{CollabStatus, Collaboration},
    repositories::scoring::COLLAB_POINTS,
    Collection, IdeaHub, RecordStore,
};
use crate::error::{Error, Result};

impl<S: RecordStore> IdeaHub<S> {
    /// File a collaboration request in `pending` state and award the
    /// requester [`COLLAB_POINTS`]. The idea id is recorded as given, without
    /// checking that it resolves.
    pub fn request_collaboration(
        &self,
        idea_id: &str,
        requester_name: &str,
        requester_college_id: &str,
        reason: &str,
    ) -> Result<Collaboration> {
        let idea_id = require(idea_id, "ideaId")?;
        let requester_name = require(requester_name, "requesterName")?;
        let requester_college_id = require(requester_college_id, "requesterCollegeId")?;
        let reason = require(reason, "reason")?;

        let collab = Collaboration {
            id: Uuid::new_v4().to_string(),
            idea_id,
            requester_name,
            requester_college_id,
            reason,
            status: CollabStatus::Pending,
            created_at: Utc::now(),
            response_at: None,
        };

        let mut collaborations: Vec<Collaboration> =
            self.store().load(Collection::Collaborations)?;
        collaborations.push(collab.clone());
        self.store().save(Collection::Collaborations, &collaborations)?;

        self.award_points(&collab.requester_college_id, COLLAB_POINTS)?;

        Ok(collab)
    }

    /// Requests filed against one idea, in storage order.
    pub fn collaborations_for_idea(&self, idea_id: &str) -> Result<Vec<Collaboration>> {
        let collaborations: Vec<Collaboration> = self.store().load(Collection::Collaborations)?;
        Ok(collaborations
            .into_iter()
            .filter(|c| c.idea_id == idea_id)
            .collect())
    }

    pub fn list_collaborations(&self) -> Result<Vec<Collaboration>> {
        let collaborations = self.store().load(Collection::Collaborations)?;
        Ok(collaborations)
    }

    /// Set a request's status. `response_at` is stamped on every call, even
    /// when the status did not change. No history is kept.
    pub fn update_collaboration_status(&self, id: &str, status: &str) -> Result<Collaboration> {
        let mut collaborations: Vec<Collaboration> =
            self.store().load(Collection::Collaborations)?;
        let collab = collaborations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(Error::NotFound("Collaboration request"))?;

        let status =
            CollabStatus::parse(status).ok_or_else(|| Error::validation("Invalid status"))?;

        collab.status = status;
        collab.response_at = Some(Utc::now());
        let updated = collab.clone();
        self.store().save(Collection::Collaborations, &collaborations)?;

        Ok(updated)
    }
}
