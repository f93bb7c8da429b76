//! The data layer: a [`RecordStore`] holding four flat JSON collections, and
//! the [`IdeaHub`] handle whose repository operations are attached by the
//! repository modules, split per entity.
//!
//! Every operation is a synchronous load → mutate → save cycle over a whole
//! collection. Nothing is cached between calls and no locking is taken
//! beyond what the store itself needs internally; concurrent writers can
//! race, which is an accepted property of this layer.

pub(crate) mod helpers;
pub mod models;
mod repositories;
mod store;

pub use repositories::scoring::{COLLAB_POINTS, COMMENT_POINTS, IDEA_POINTS, UPVOTE_POINTS};
pub use store::{Collection, FileStore, MemoryStore, RecordStore};

use crate::error::Result;

/// Handle over a record store. Cheap to construct; holds no state of its own.
pub struct IdeaHub<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> IdeaHub<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl IdeaHub<FileStore> {
    /// Open (and seed if necessary) the flat-file store under `data_dir`.
    pub fn open(data_dir: impl Into<std::path::PathBuf>) -> Result<Self> {
        Ok(Self::new(FileStore::new(data_dir)?))
    }
}
