//! The storage capability shared by every backend.
//!
//! Handlers and the seeder only ever see `dyn TrackStore`, so the backend is
//! picked once at startup and passed down explicitly.

mod memory;
mod sql;

use std::collections::HashSet;

use async_trait::async_trait;
use tracklist_core::types::DbId;

use crate::models::track::{CreateTrack, Track, UpdateTrack};

pub use memory::MemoryTrackStore;
pub use sql::SqlTrackStore;

/// Errors raised by a [`TrackStore`].
///
/// Absence is reported through `Option`/`bool`, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Writing the record would give two tracks the same id.
    #[error("Duplicate track id {0}")]
    DuplicateId(DbId),

    /// The largest possible id is taken, so no new id can be assigned.
    #[error("No track id left to assign")]
    IdSpaceExhausted,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// First id that occurs twice across `existing` and `records`.
pub(crate) fn find_duplicate_id<I>(existing: I, records: &[Track]) -> Option<DbId>
where
    I: IntoIterator<Item = DbId>,
{
    let mut seen: HashSet<DbId> = existing.into_iter().collect();
    records.iter().map(|t| t.id).find(|id| !seen.insert(*id))
}

/// Canonical owner of the track records.
#[async_trait]
pub trait TrackStore: Send + Sync {
    /// All tracks in storage order.
    async fn list(&self) -> StoreResult<Vec<Track>>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Track>>;

    /// Store a new track under a freshly assigned id.
    async fn create(&self, input: &CreateTrack) -> StoreResult<Track>;

    /// Apply a partial update. `None` if the id does not exist.
    async fn update(&self, id: DbId, input: &UpdateTrack) -> StoreResult<Option<Track>>;

    /// Remove a track. `false` if the id does not exist.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;

    async fn count(&self) -> StoreResult<u64>;

    /// Insert complete records verbatim, ids included.
    ///
    /// Fails with [`StoreError::DuplicateId`] without inserting anything if
    /// an id repeats within `tracks` or is already stored.
    async fn seed(&self, tracks: &[Track]) -> StoreResult<u64>;

    /// Check that the backend can serve requests.
    async fn health_check(&self) -> StoreResult<()>;
}
