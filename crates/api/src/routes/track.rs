//! Route definitions for tracks.

use axum::routing::get;
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

/// Track routes, mounted at the root.
///
/// ```text
/// GET    /tracks/       -> list
/// POST   /tracks/       -> create
/// GET    /tracks/{id}   -> get_by_id
/// PUT    /tracks/{id}   -> update
/// DELETE /tracks/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tracks/", get(track::list).post(track::create))
        .route("/tracks", get(track::list).post(track::create))
        .route(
            "/tracks/{id}",
            get(track::get_by_id)
                .put(track::update)
                .delete(track::delete),
        )
}
