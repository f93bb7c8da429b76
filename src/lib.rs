//! Data layer for IdeaHub, a student idea-sharing platform.
//!
//! Students register (upsert keyed by collegeId), post ideas, comment,
//! upvote, and request collaborations; aggregate analytics are derived
//! read-only views. Persistence is four flat JSON documents, each reloaded
//! and rewritten wholesale per operation — see [`db`] for the store and
//! repository contracts and [`analytics`] for the derived views.
//!
//! HTTP routing, request parsing, and startup wiring live in the embedding
//! binary; this crate only exposes the typed operations and the
//! Validation / NotFound / Storage error taxonomy they fail with.

pub mod analytics;
pub mod db;
pub mod error;
pub mod utils;

pub use analytics::Analytics;
pub use db::models::{
    CollabStatus, Collaboration, Comment, Idea, IdeaPatch, IdeaSort, NewIdea, Student,
};
pub use db::{
    Collection, FileStore, IdeaHub, MemoryStore, RecordStore, COLLAB_POINTS, COMMENT_POINTS,
    IDEA_POINTS, UPVOTE_POINTS,
};
pub use error::{Error, Result};
