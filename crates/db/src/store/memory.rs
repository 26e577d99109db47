use async_trait::async_trait;
use tokio::sync::RwLock;
use tracklist_core::ids::next_id;
use tracklist_core::types::DbId;

use super::{find_duplicate_id, StoreError, StoreResult, TrackStore};
use crate::models::track::{CreateTrack, Track, UpdateTrack};

/// Tracks held in an ordered list for the lifetime of the process.
///
/// Lookups are linear scans where the first match wins. Mutations take the
/// write lock, so concurrent creates never hand out the same id.
#[derive(Debug, Default)]
pub struct MemoryTrackStore {
    tracks: RwLock<Vec<Track>>,
}

impl MemoryTrackStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrackStore for MemoryTrackStore {
    async fn list(&self) -> StoreResult<Vec<Track>> {
        Ok(self.tracks.read().await.clone())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Track>> {
        let tracks = self.tracks.read().await;
        Ok(tracks.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, input: &CreateTrack) -> StoreResult<Track> {
        let mut tracks = self.tracks.write().await;
        let id = next_id(tracks.iter().map(|t| t.id)).ok_or(StoreError::IdSpaceExhausted)?;
        let track = input.clone().into_track(id);
        tracks.push(track.clone());
        Ok(track)
    }

    async fn update(&self, id: DbId, input: &UpdateTrack) -> StoreResult<Option<Track>> {
        let mut tracks = self.tracks.write().await;
        Ok(tracks.iter_mut().find(|t| t.id == id).map(|track| {
            input.apply_to(track);
            track.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut tracks = self.tracks.write().await;
        match tracks.iter().position(|t| t.id == id) {
            Some(index) => {
                tracks.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.tracks.read().await.len() as u64)
    }

    async fn seed(&self, records: &[Track]) -> StoreResult<u64> {
        let mut tracks = self.tracks.write().await;
        if let Some(id) = find_duplicate_id(tracks.iter().map(|t| t.id), records) {
            return Err(StoreError::DuplicateId(id));
        }
        tracks.extend_from_slice(records);
        Ok(records.len() as u64)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
