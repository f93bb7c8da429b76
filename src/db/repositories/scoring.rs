//! Best-effort point awards applied as side effects of other mutations.
//!
//! A missing student is not an error here: the triggering operation (idea
//! creation, comment, upvote, collaboration request) still succeeds and the
//! award is simply skipped. Storage failures do propagate.

use crate::db::{IdeaHub, RecordStore};
use crate::error::{Error, Result};
use crate::log_info;

const ENABLE_LOGS: bool = true;

/// Awarded to the author when an idea is created.
pub const IDEA_POINTS: i64 = 10;
/// Awarded to the upvoter when an upvote is added (never revoked on removal).
pub const UPVOTE_POINTS: i64 = 5;
/// Awarded to the author when a comment is added.
pub const COMMENT_POINTS: i64 = 3;
/// Awarded to the requester when a collaboration is requested.
pub const COLLAB_POINTS: i64 = 2;

impl<S: RecordStore> IdeaHub<S> {
    pub(crate) fn award_points(&self, college_id: &str, delta: i64) -> Result<()> {
        match self.add_points(college_id, delta) {
            Ok(_) => Ok(()),
            Err(Error::NotFound(_)) => {
                log_info!("skipping {delta} point award: no student with collegeId {college_id}");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
