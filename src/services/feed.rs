// src/services/feed.rs

//! HTTP feed source.
//!
//! Fetches the announcements endpoint with a configured client and
//! parses the body as a JSON array of announcements.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::FetchError;
use crate::models::Announcement;
use crate::services::FeedSource;

/// Feed source that issues a GET against the configured endpoint.
pub struct HttpFeedSource {
    client: Client,
    feed_url: String,
}

impl HttpFeedSource {
    /// Create a feed source with a client configured from `config`.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.fetch_timeout())
            .build()?;

        Ok(Self {
            client,
            feed_url: config.feed_url.clone(),
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<Vec<Announcement>, FetchError> {
        log::debug!("GET {}", self.feed_url);

        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await?
            .error_for_status()?;

        // Parse from text rather than response.json() so malformed
        // bodies surface as parse errors, not transport errors.
        let body = response.text().await?;
        let feed: Vec<Announcement> = serde_json::from_str(&body)?;
        Ok(feed)
    }
}
