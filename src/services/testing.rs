//! Deterministic in-memory item source for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::models::{CommentId, CommentRecord, StoryId, StoryRecord};
use crate::services::ItemSource;

/// Serves canned stories and comments and counts lookups.
#[derive(Debug, Default)]
pub struct StaticSource {
    top: Vec<StoryId>,
    stories: HashMap<StoryId, StoryRecord>,
    comments: HashMap<CommentId, CommentRecord>,
    story_requests: AtomicUsize,
    comment_requests: AtomicUsize,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top(mut self, ids: &[StoryId]) -> Self {
        self.top = ids.to_vec();
        self
    }

    pub fn with_story(mut self, story: StoryRecord) -> Self {
        self.stories.insert(story.id, story);
        self
    }

    /// Add a titled story with an optional url and kids.
    pub fn with_titled(
        self,
        id: StoryId,
        title: &str,
        url: Option<&str>,
        kids: &[CommentId],
    ) -> Self {
        self.with_story(StoryRecord {
            id,
            title: title.to_string(),
            url: url.map(str::to_string),
            time: 1_700_000_000 + id as i64,
            kids: kids.to_vec(),
        })
    }

    pub fn with_comment(mut self, id: CommentId, text: Option<&str>) -> Self {
        self.comments.insert(
            id,
            CommentRecord {
                id,
                text: text.map(str::to_string),
                by: Some("someone".to_string()),
                time: None,
            },
        );
        self
    }

    pub fn story_requests(&self) -> usize {
        self.story_requests.load(Ordering::SeqCst)
    }

    pub fn comment_requests(&self) -> usize {
        self.comment_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemSource for StaticSource {
    async fn top_story_ids(&self, limit: usize) -> Vec<StoryId> {
        self.top.iter().copied().take(limit).collect()
    }

    async fn story(&self, id: StoryId) -> Option<StoryRecord> {
        self.story_requests.fetch_add(1, Ordering::SeqCst);
        self.stories.get(&id).cloned()
    }

    async fn comment(&self, id: CommentId) -> Option<CommentRecord> {
        self.comment_requests.fetch_add(1, Ordering::SeqCst);
        self.comments.get(&id).cloned()
    }
}
