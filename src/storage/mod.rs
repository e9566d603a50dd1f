// src/storage/mod.rs
//! Storage abstraction for the last-seen announcement marker.
//!
//! Exactly one scalar survives restarts: the id of the most recent
//! announcement already processed. The trait keeps the diff engine
//! unaware of where that value lives.

pub mod local;

use async_trait::async_trait;

use crate::error::StateError;

pub use local::LocalMarkerStore;

/// Persistence backend for the last-seen marker.
#[async_trait]
pub trait MarkerStore: Send + Sync {
    /// Load the persisted marker.
    ///
    /// Returns `Ok(None)` on first run, i.e. when no state has been
    /// written yet.
    async fn load(&self) -> Result<Option<String>, StateError>;

    /// Persist the marker, replacing any previous value.
    ///
    /// The value must be durable before this returns so a crash right
    /// after cannot lose it.
    async fn save(&self, id: &str) -> Result<(), StateError>;
}
