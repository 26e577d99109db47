//! Track entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracklist_core::types::{DbId, Timestamp};

/// A row from the `tracks` table.
///
/// Also the shape of each record in the seed dataset, which is why it
/// derives `Deserialize`: seeded records carry their own `id`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Track {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    /// Length in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub last_play: Option<Timestamp>,
}

/// DTO for creating a new track.
///
/// There is no `id` field: the store assigns one, and an `id` sent by the
/// client is dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrack {
    pub title: String,
    pub artist: Option<String>,
    pub duration: Option<f64>,
    pub last_play: Option<Timestamp>,
}

impl CreateTrack {
    /// Attach an id, producing the record to store.
    pub fn into_track(self, id: DbId) -> Track {
        Track {
            id,
            title: self.title,
            artist: self.artist,
            duration: self.duration,
            last_play: self.last_play,
        }
    }
}

/// DTO for updating an existing track. All fields optional; id is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTrack {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration: Option<f64>,
    pub last_play: Option<Timestamp>,
}

impl UpdateTrack {
    /// Overwrite the fields present in this payload; everything else keeps
    /// its stored value.
    pub fn apply_to(&self, track: &mut Track) {
        if let Some(title) = &self.title {
            track.title.clone_from(title);
        }
        if let Some(artist) = &self.artist {
            track.artist = Some(artist.clone());
        }
        if let Some(duration) = self.duration {
            track.duration = Some(duration);
        }
        if let Some(last_play) = self.last_play {
            track.last_play = Some(last_play);
        }
    }
}
