//! Feed emission.
//!
//! The pipeline hands an ordered list of entries to a [`FeedWriter`] and only
//! needs a short summary back for logging.

pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::MatchedEntry;

// Re-export for convenience
pub use local::RssFileWriter;

/// Metadata about a feed write.
#[derive(Debug, Clone)]
pub struct FeedSummary {
    /// Number of items written
    pub item_count: usize,
    /// Where the feed ended up
    pub location: PathBuf,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for feed output backends.
#[async_trait]
pub trait FeedWriter: Send + Sync {
    /// Serialize `entries` in the given order.
    async fn write_feed(&self, entries: &[MatchedEntry]) -> Result<FeedSummary>;
}
