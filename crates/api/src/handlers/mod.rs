//! Request handlers.
//!
//! Handlers delegate to the [`TrackStore`](tracklist_db::store::TrackStore)
//! in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod track;
