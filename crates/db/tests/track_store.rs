//! Behaviour shared by both storage backends.
//!
//! Every check is written against `&dyn TrackStore` and run once with the
//! in-memory list and once with an in-memory SQLite database.

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use tracklist_db::models::track::{CreateTrack, Track, UpdateTrack};
use tracklist_db::repositories::TrackRepo;
use tracklist_db::store::{MemoryTrackStore, SqlTrackStore, StoreError, TrackStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn sql_store() -> SqlTrackStore {
    let pool = tracklist_db::create_pool("sqlite::memory:").await.unwrap();
    tracklist_db::run_migrations(&pool).await.unwrap();
    SqlTrackStore::new(pool)
}

fn new_track(title: &str) -> CreateTrack {
    CreateTrack {
        title: title.to_string(),
        artist: None,
        duration: None,
        last_play: None,
    }
}

fn record(id: i64, title: &str) -> Track {
    new_track(title).into_track(id)
}

fn scenario_seed() -> Vec<Track> {
    vec![record(1, "A"), record(2, "B")]
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

async fn check_create_then_get_round_trips(store: &dyn TrackStore) {
    let input = CreateTrack {
        title: "Full".to_string(),
        artist: Some("Someone".to_string()),
        duration: Some(212.75),
        last_play: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()),
    };

    let created = store.create(&input).await.unwrap();
    let fetched = store.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "Full");
    assert_eq!(fetched.artist.as_deref(), Some("Someone"));
    assert_eq!(fetched.duration, Some(212.75));
    assert_eq!(fetched.last_play, input.last_play);
}

async fn check_create_on_empty_store_starts_at_one(store: &dyn TrackStore) {
    let created = store.create(&new_track("First")).await.unwrap();
    assert_eq!(created.id, 1);
}

async fn check_scenario(store: &dyn TrackStore) {
    assert_eq!(store.seed(&scenario_seed()).await.unwrap(), 2);

    let listed = store.list().await.unwrap();
    assert_eq!(listed, scenario_seed());

    let one = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(one, record(1, "A"));

    let created = store.create(&new_track("C")).await.unwrap();
    assert_eq!(created, record(3, "C"));

    let patch = UpdateTrack {
        title: Some("B2".to_string()),
        ..Default::default()
    };
    let updated = store.update(2, &patch).await.unwrap().unwrap();
    assert_eq!(updated, record(2, "B2"));
    assert_eq!(store.find_by_id(2).await.unwrap().unwrap(), record(2, "B2"));

    assert!(store.delete(1).await.unwrap());
    assert!(store.find_by_id(1).await.unwrap().is_none());
}

async fn check_partial_update_keeps_other_fields(store: &dyn TrackStore) {
    let created = store
        .create(&CreateTrack {
            title: "Before".to_string(),
            artist: Some("Artist".to_string()),
            duration: Some(99.0),
            last_play: None,
        })
        .await
        .unwrap();

    let patch = UpdateTrack {
        duration: Some(100.5),
        ..Default::default()
    };
    store.update(created.id, &patch).await.unwrap().unwrap();

    let fetched = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "Before");
    assert_eq!(fetched.artist.as_deref(), Some("Artist"));
    assert_eq!(fetched.duration, Some(100.5));
    assert_eq!(fetched.last_play, None);
}

async fn check_missing_ids_are_absent_not_errors(store: &dyn TrackStore) {
    store.seed(&scenario_seed()).await.unwrap();

    assert!(store.find_by_id(404).await.unwrap().is_none());
    assert!(store
        .update(404, &UpdateTrack::default())
        .await
        .unwrap()
        .is_none());
    assert!(!store.delete(404).await.unwrap());
}

async fn check_second_delete_reports_absent(store: &dyn TrackStore) {
    let created = store.create(&new_track("Gone")).await.unwrap();

    assert!(store.delete(created.id).await.unwrap());
    assert!(!store.delete(created.id).await.unwrap());
    assert_eq!(store.count().await.unwrap(), 0);
}

async fn check_listed_ids_are_unique(store: &dyn TrackStore) {
    store.seed(&scenario_seed()).await.unwrap();
    for title in ["x", "y", "z"] {
        store.create(&new_track(title)).await.unwrap();
    }
    store.delete(2).await.unwrap();
    store.create(&new_track("w")).await.unwrap();

    let mut ids: Vec<_> = store.list().await.unwrap().iter().map(|t| t.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(total, 5);
}

async fn check_seed_with_repeated_id_is_rejected(store: &dyn TrackStore) {
    let err = store
        .seed(&[record(1, "A"), record(1, "B")])
        .await
        .unwrap_err();

    assert_matches!(err, StoreError::DuplicateId(1));
    assert_eq!(store.count().await.unwrap(), 0);
}

async fn check_seed_colliding_with_stored_id_is_rejected(store: &dyn TrackStore) {
    store.seed(&scenario_seed()).await.unwrap();

    let err = store
        .seed(&[record(7, "New"), record(2, "Clash")])
        .await
        .unwrap_err();

    assert_matches!(err, StoreError::DuplicateId(2));
    let ids: Vec<_> = store.list().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn memory_create_then_get_round_trips() {
    check_create_then_get_round_trips(&MemoryTrackStore::new()).await;
}

#[tokio::test]
async fn memory_create_on_empty_store_starts_at_one() {
    check_create_on_empty_store_starts_at_one(&MemoryTrackStore::new()).await;
}

#[tokio::test]
async fn memory_scenario() {
    check_scenario(&MemoryTrackStore::new()).await;
}

#[tokio::test]
async fn memory_partial_update_keeps_other_fields() {
    check_partial_update_keeps_other_fields(&MemoryTrackStore::new()).await;
}

#[tokio::test]
async fn memory_missing_ids_are_absent_not_errors() {
    check_missing_ids_are_absent_not_errors(&MemoryTrackStore::new()).await;
}

#[tokio::test]
async fn memory_second_delete_reports_absent() {
    check_second_delete_reports_absent(&MemoryTrackStore::new()).await;
}

#[tokio::test]
async fn memory_listed_ids_are_unique() {
    check_listed_ids_are_unique(&MemoryTrackStore::new()).await;
}

#[tokio::test]
async fn memory_seed_with_repeated_id_is_rejected() {
    check_seed_with_repeated_id_is_rejected(&MemoryTrackStore::new()).await;
}

#[tokio::test]
async fn memory_seed_colliding_with_stored_id_is_rejected() {
    check_seed_colliding_with_stored_id_is_rejected(&MemoryTrackStore::new()).await;
}

#[tokio::test]
async fn memory_create_after_maximum_id_is_refused() {
    let store = MemoryTrackStore::new();
    store.seed(&[record(i64::MAX, "Max")]).await.unwrap();

    let err = store.create(&new_track("C")).await.unwrap_err();

    assert_matches!(err, StoreError::IdSpaceExhausted);
    let ids: Vec<_> = store.list().await.unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![i64::MAX]);
}

// ---------------------------------------------------------------------------
// SQLite backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sql_create_then_get_round_trips() {
    check_create_then_get_round_trips(&sql_store().await).await;
}

#[tokio::test]
async fn sql_create_on_empty_store_starts_at_one() {
    check_create_on_empty_store_starts_at_one(&sql_store().await).await;
}

#[tokio::test]
async fn sql_scenario() {
    check_scenario(&sql_store().await).await;
}

#[tokio::test]
async fn sql_partial_update_keeps_other_fields() {
    check_partial_update_keeps_other_fields(&sql_store().await).await;
}

#[tokio::test]
async fn sql_missing_ids_are_absent_not_errors() {
    check_missing_ids_are_absent_not_errors(&sql_store().await).await;
}

#[tokio::test]
async fn sql_second_delete_reports_absent() {
    check_second_delete_reports_absent(&sql_store().await).await;
}

#[tokio::test]
async fn sql_listed_ids_are_unique() {
    check_listed_ids_are_unique(&sql_store().await).await;
}

#[tokio::test]
async fn sql_seed_with_repeated_id_is_rejected() {
    check_seed_with_repeated_id_is_rejected(&sql_store().await).await;
}

#[tokio::test]
async fn sql_seed_colliding_with_stored_id_is_rejected() {
    check_seed_colliding_with_stored_id_is_rejected(&sql_store().await).await;
}

#[tokio::test]
async fn repo_bulk_insert_with_duplicate_id_rolls_back() {
    let pool = tracklist_db::create_pool("sqlite::memory:").await.unwrap();
    tracklist_db::run_migrations(&pool).await.unwrap();

    let err = TrackRepo::insert_many(&pool, &[record(1, "A"), record(1, "A again")])
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("expected a database error, got {other:?}"),
    }
    assert_eq!(TrackRepo::count(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn sql_create_after_maximum_id_does_not_duplicate() {
    let store = sql_store().await;
    store.seed(&[record(i64::MAX, "Max")]).await.unwrap();

    // SQLite falls back to an unused random rowid once the maximum is taken.
    let created = store.create(&new_track("C")).await.unwrap();

    assert_ne!(created.id, i64::MAX);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn sql_health_check_passes() {
    let store = sql_store().await;
    store.health_check().await.unwrap();
}
