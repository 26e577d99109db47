//! Startup seeding from the bundled dataset.
//!
//! Storage is seeded only when it is completely empty. The emptiness check
//! and the inserts are separate steps, so two processes starting against the
//! same database at once could both seed; a single instance is assumed.

use std::path::{Path, PathBuf};

use crate::models::track::Track;
use crate::store::{StoreError, TrackStore};

/// What [`seed_if_empty`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Storage already held records; the dataset was not read.
    Skipped { existing: u64 },
    /// Storage was empty and the dataset was inserted.
    Seeded { inserted: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file {path} is not a valid track list: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to store seed data: {0}")]
    Store(#[from] StoreError),
}

/// Parse a seed dataset: a JSON array of complete track records.
pub fn parse_dataset(bytes: &[u8]) -> Result<Vec<Track>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Insert every record from `path` into `store` if the store is empty.
///
/// Records keep their ids and field values exactly as written in the file.
pub async fn seed_if_empty(
    store: &dyn TrackStore,
    path: &Path,
) -> Result<SeedOutcome, SeedError> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::info!(existing, "Storage already populated, skipping seed");
        return Ok(SeedOutcome::Skipped { existing });
    }

    let bytes = tokio::fs::read(path).await.map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tracks = parse_dataset(&bytes).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let inserted = store.seed(&tracks).await?;
    tracing::info!(inserted, path = %path.display(), "Seeded tracks");

    Ok(SeedOutcome::Seeded { inserted })
}
