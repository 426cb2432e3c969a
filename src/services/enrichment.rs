// src/services/enrichment.rs

//! Top-comment enrichment for selected stories.

use crate::models::StoryRecord;
use crate::services::ItemSource;

/// Text of the story's first child comment, if it can be resolved.
///
/// Only the first kid is consulted; a missing or textless comment yields
/// `None` rather than falling back to later siblings.
pub async fn top_comment_summary(source: &dyn ItemSource, story: &StoryRecord) -> Option<String> {
    let first = *story.kids.first()?;
    let comment = source.comment(first).await?;
    if comment.text.is_none() {
        log::debug!("Top comment {} of story {} has no text", first, story.id);
    }
    comment.text
}
