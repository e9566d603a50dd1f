// src/services/mod.rs
//! Service layer for the announcement monitor.
//!
//! Home of the feed source, the component that turns the remote JSON
//! endpoint into a typed list of announcements.

mod feed;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::Announcement;

pub use feed::HttpFeedSource;

/// Source of the announcement feed.
///
/// The feed is expected newest-first; callers rely on that order and
/// never re-sort.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the current feed snapshot.
    async fn fetch(&self) -> Result<Vec<Announcement>, FetchError>;
}
