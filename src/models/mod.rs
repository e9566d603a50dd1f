// src/models/mod.rs

//! Domain models for the announcement watcher.

mod announcement;

// Re-export all public types
pub use announcement::{Announcement, DocumentLink};
