//! Story and comment records resolved from the item API.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// Identifier of a story, assigned by the remote API.
pub type StoryId = u64;

/// Identifier of a comment.
pub type CommentId = u64;

/// Raw item as returned by `/item/{id}.json`.
///
/// Stories and comments share this shape; every field is optional so that a
/// malformed item is rejected by the conversion step rather than by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub kids: Option<Vec<u64>>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub by: Option<String>,
    #[serde(default)]
    pub deleted: Option<bool>,
    #[serde(default)]
    pub dead: Option<bool>,
}

impl Item {
    fn is_gone(&self) -> bool {
        self.deleted.unwrap_or(false) || self.dead.unwrap_or(false)
    }
}

/// A story that passed the shape check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryRecord {
    pub id: StoryId,

    /// Story title, never blank
    pub title: String,

    /// Original article URL; backfilled with the discussion link by the
    /// selection pipeline when the story has none
    pub url: Option<String>,

    /// Unix timestamp in seconds
    pub time: i64,

    /// Child comment ids in ranked order
    pub kids: Vec<CommentId>,
}

impl StoryRecord {
    /// Convert a raw item into a story, or `None` if it is unusable.
    pub fn from_item(item: Item) -> Option<Self> {
        if item.is_gone() {
            return None;
        }

        let title = item.title.filter(|t| !t.trim().is_empty())?;
        let time = item.time?;

        Some(Self {
            id: item.id,
            title,
            url: item.url.filter(|u| !u.trim().is_empty()),
            time,
            kids: item.kids.unwrap_or_default(),
        })
    }
}

/// A comment used to enrich a story summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRecord {
    pub id: CommentId,
    pub text: Option<String>,
    pub by: Option<String>,
    pub time: Option<i64>,
}

impl CommentRecord {
    /// Convert a raw item into a comment.
    ///
    /// Deleted and dead comments keep their id but lose their text.
    pub fn from_item(item: Item) -> Self {
        let gone = item.is_gone();
        Self {
            id: item.id,
            text: item.text.filter(|t| !gone && !t.trim().is_empty()),
            by: item.by,
            time: item.time,
        }
    }
}

/// Build the canonical discussion page URL for a story.
///
/// ```
/// use hnfeed::models::story_discussion_url;
///
/// assert_eq!(
///     story_discussion_url("https://news.ycombinator.com/item", 42).unwrap(),
///     "https://news.ycombinator.com/item?id=42"
/// );
/// ```
pub fn story_discussion_url(base: &str, id: StoryId) -> Result<String> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut().append_pair("id", &id.to_string());
    Ok(url.into())
}
