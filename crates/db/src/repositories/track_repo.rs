//! Repository for the `tracks` table.

use sqlx::SqlitePool;
use tracklist_core::types::DbId;

use crate::models::track::{CreateTrack, Track, UpdateTrack};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, artist, duration, last_play";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row. SQLite assigns the id.
    pub async fn create(pool: &SqlitePool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (title, artist, duration, last_play) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.title)
            .bind(&input.artist)
            .bind(input.duration)
            .bind(input.last_play)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = ?1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY id");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }

    /// Update a track. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTrack,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET \
                title = COALESCE(?2, title), \
                artist = COALESCE(?3, artist), \
                duration = COALESCE(?4, duration), \
                last_play = COALESCE(?5, last_play) \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.artist)
            .bind(input.duration)
            .bind(input.last_play)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All stored ids, ascending.
    pub async fn list_ids(pool: &SqlitePool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM tracks ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Count all tracks.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tracks")
            .fetch_one(pool)
            .await
    }

    /// Insert complete records, keeping their ids, in a single transaction.
    ///
    /// A duplicate id aborts the whole batch with a unique violation.
    pub async fn insert_many(pool: &SqlitePool, tracks: &[Track]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for track in tracks {
            let result = sqlx::query(
                "INSERT INTO tracks (id, title, artist, duration, last_play) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(track.id)
            .bind(&track.title)
            .bind(&track.artist)
            .bind(track.duration)
            .bind(track.last_play)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
