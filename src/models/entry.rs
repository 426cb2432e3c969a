//! Feed entry produced for each selected story.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{StoryId, StoryRecord};

/// A selected story packaged for feed emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedEntry {
    pub id: StoryId,
    pub title: String,

    /// Discussion page URL
    pub link: String,

    /// Unix timestamp in seconds
    pub published: i64,

    /// Top comment text, or a link-based fallback
    pub summary: String,
}

impl MatchedEntry {
    /// Package a story with its discussion link and summary.
    pub fn new(story: &StoryRecord, link: String, summary: String) -> Self {
        Self {
            id: story.id,
            title: story.title.clone(),
            link,
            published: story.time,
            summary,
        }
    }

    /// Publication time as a UTC datetime, if the timestamp is representable.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.published, 0)
    }
}

/// Link-based summary used when no comment text is available.
///
/// Points at the original article when it differs from the discussion page.
pub fn fallback_summary(story: &StoryRecord, discussion_url: &str) -> String {
    match story.url.as_deref() {
        Some(url) if url != discussion_url => format!("Article: {url}"),
        _ => format!("Comments: {discussion_url}"),
    }
}
