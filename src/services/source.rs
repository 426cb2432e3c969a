// src/services/source.rs

//! Remote item source.
//!
//! Every lookup performs one bounded request. Failures are logged and turned
//! into absent results so that one bad item never aborts a run.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, CommentId, CommentRecord, Item, StoryId, StoryRecord};
use crate::utils::http;

/// Source of story ids, stories, and comments.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Current top story ids, truncated to `limit`. Empty on failure.
    async fn top_story_ids(&self, limit: usize) -> Vec<StoryId>;

    /// Resolve a story. `None` on transport failure or unusable shape.
    async fn story(&self, id: StoryId) -> Option<StoryRecord>;

    /// Resolve a comment. `None` on transport failure.
    async fn comment(&self, id: CommentId) -> Option<CommentRecord>;
}

/// Client for the Hacker News Firebase API.
pub struct HackerNewsClient {
    client: Client,
    base_url: String,
    list_timeout: Duration,
    item_timeout: Duration,
}

impl HackerNewsClient {
    /// Create a client with a freshly built HTTP client.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = http::create_async_client(config)?;
        Ok(Self::with_client(client, config))
    }

    /// Create a client around an existing HTTP client.
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            list_timeout: Duration::from_secs(config.list_timeout_secs),
            item_timeout: Duration::from_secs(config.item_timeout_secs),
        }
    }

    fn top_stories_url(&self) -> String {
        format!("{}/topstories.json", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/item/{}.json", self.base_url, id)
    }

    /// Fetch an item; the API answers `null` for unknown ids.
    async fn fetch_item(&self, id: u64) -> Result<Option<Item>> {
        http::fetch_json(&self.client, &self.item_url(id), self.item_timeout).await
    }
}

#[async_trait]
impl ItemSource for HackerNewsClient {
    async fn top_story_ids(&self, limit: usize) -> Vec<StoryId> {
        let url = self.top_stories_url();
        match http::fetch_json::<Vec<StoryId>>(&self.client, &url, self.list_timeout).await {
            Ok(mut ids) => {
                ids.truncate(limit);
                ids
            }
            Err(e) => {
                log::error!("Error fetching top stories: {}", e);
                Vec::new()
            }
        }
    }

    async fn story(&self, id: StoryId) -> Option<StoryRecord> {
        match self.fetch_item(id).await {
            Ok(Some(item)) => {
                let story = StoryRecord::from_item(item);
                if story.is_none() {
                    log::debug!("Skipping story {}: unusable item", id);
                }
                story
            }
            Ok(None) => {
                log::debug!("Skipping story {}: not found", id);
                None
            }
            Err(AppError::Json(e)) => {
                log::debug!("Skipping story {}: malformed item: {}", id, e);
                None
            }
            Err(e) => {
                log::error!("Error fetching story {}: {}", id, e);
                None
            }
        }
    }

    async fn comment(&self, id: CommentId) -> Option<CommentRecord> {
        match self.fetch_item(id).await {
            Ok(item) => item.map(CommentRecord::from_item),
            Err(AppError::Json(e)) => {
                log::debug!("Skipping comment {}: malformed item: {}", id, e);
                None
            }
            Err(e) => {
                log::error!("Error fetching comment {}: {}", id, e);
                None
            }
        }
    }
}
