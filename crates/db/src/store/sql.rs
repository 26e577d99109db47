use async_trait::async_trait;
use tracklist_core::types::DbId;

use super::{find_duplicate_id, StoreError, StoreResult, TrackStore};
use crate::models::track::{CreateTrack, Track, UpdateTrack};
use crate::repositories::TrackRepo;
use crate::DbPool;

/// Tracks persisted in the `tracks` table.
///
/// Holds only the pool; every call checks out its own connection and
/// auto-commits, and no rows are cached between calls.
#[derive(Debug, Clone)]
pub struct SqlTrackStore {
    pool: DbPool,
}

impl SqlTrackStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackStore for SqlTrackStore {
    async fn list(&self) -> StoreResult<Vec<Track>> {
        Ok(TrackRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Track>> {
        Ok(TrackRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create(&self, input: &CreateTrack) -> StoreResult<Track> {
        Ok(TrackRepo::create(&self.pool, input).await?)
    }

    async fn update(&self, id: DbId, input: &UpdateTrack) -> StoreResult<Option<Track>> {
        Ok(TrackRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        Ok(TrackRepo::delete(&self.pool, id).await?)
    }

    async fn count(&self) -> StoreResult<u64> {
        let count = TrackRepo::count(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn seed(&self, tracks: &[Track]) -> StoreResult<u64> {
        let existing = TrackRepo::list_ids(&self.pool).await?;
        if let Some(id) = find_duplicate_id(existing, tracks) {
            return Err(StoreError::DuplicateId(id));
        }
        // A row written between the check and the insert still surfaces as a
        // unique violation and rolls the batch back.
        Ok(TrackRepo::insert_many(&self.pool, tracks).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
