// src/models/mod.rs

//! Domain models for the feed builder.
//!
//! This module contains the configuration tree and the records that flow
//! through the pipeline, from raw API items to feed entries.

mod config;
mod entry;
mod story;

// Re-export all public types
pub use config::{ApiConfig, Config, FeedConfig, FilterConfig, KeywordsConfig};
pub use entry::{MatchedEntry, fallback_summary};
pub use story::{CommentId, CommentRecord, Item, StoryId, StoryRecord, story_discussion_url};
