//! Shared types and domain rules for the track service.
//!
//! This crate has no I/O; the storage and HTTP crates build on it.

pub mod error;
pub mod ids;
pub mod types;
