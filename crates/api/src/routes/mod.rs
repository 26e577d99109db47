//! Route tables.
//!
//! ```text
//! /health                      service and storage health
//!
//! /tracks/                     list, create
//! /tracks/{id}                 get, update, delete
//! ```
//!
//! The track collection also answers at `/tracks` without the slash.

pub mod health;
pub mod track;
