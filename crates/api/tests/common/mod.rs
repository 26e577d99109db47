#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tracklist_api::config::{ServerConfig, StorageBackend};
use tracklist_api::router::build_app_router;
use tracklist_api::state::AppState;
use tracklist_db::models::track::Track;
use tracklist_db::store::{MemoryTrackStore, SqlTrackStore, TrackStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(storage: StorageBackend) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        storage,
        database_url: "sqlite::memory:".to_string(),
        seed_path: PathBuf::from("data/tracks.json"),
    }
}

/// Build the full application router (same middleware stack as production)
/// around the given store.
pub fn build_test_app(store: Arc<dyn TrackStore>, storage: StorageBackend) -> Router {
    let config = test_config(storage);
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// In-memory store pre-loaded with `tracks`.
pub async fn memory_store(tracks: &[Track]) -> Arc<dyn TrackStore> {
    let store = MemoryTrackStore::new();
    store.seed(tracks).await.unwrap();
    Arc::new(store)
}

/// SQLite in-memory store with migrations applied, pre-loaded with `tracks`.
pub async fn sql_store(tracks: &[Track]) -> Arc<dyn TrackStore> {
    let pool = tracklist_db::create_pool("sqlite::memory:").await.unwrap();
    tracklist_db::run_migrations(&pool).await.unwrap();
    let store = SqlTrackStore::new(pool);
    store.seed(tracks).await.unwrap();
    Arc::new(store)
}

/// The two-record dataset used throughout the API tests.
pub fn scenario_tracks() -> Vec<Track> {
    serde_json::from_str(r#"[{"id":1,"title":"A"},{"id":2,"title":"B"}]"#).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

/// Send a request with an optional raw JSON body.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
