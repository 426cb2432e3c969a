// src/pipeline/select.rs

//! Story selection: resolve candidates, backfill links, filter by keyword.

use futures::stream::{self, StreamExt};

use crate::models::{StoryId, StoryRecord, story_discussion_url};
use crate::services::{ItemSource, KeywordMatcher};

/// Resolve `candidates` and keep the stories whose titles match.
///
/// Output preserves candidate order. Unresolvable or untitled stories are
/// skipped. Stories without a URL get their discussion link instead. At most
/// `concurrency` lookups are in flight at once.
pub async fn select_stories(
    source: &dyn ItemSource,
    candidates: &[StoryId],
    matcher: &KeywordMatcher,
    discussion_base: &str,
    concurrency: usize,
) -> Vec<StoryRecord> {
    let resolved: Vec<Option<StoryRecord>> = stream::iter(candidates.iter().copied())
        .map(|id| source.story(id))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut selected = Vec::new();
    for mut story in resolved.into_iter().flatten() {
        if story.url.is_none() {
            match story_discussion_url(discussion_base, story.id) {
                Ok(link) => story.url = Some(link),
                Err(e) => {
                    log::error!("Cannot build discussion link for story {}: {}", story.id, e);
                    continue;
                }
            }
        }

        if matcher.is_pass_through() {
            selected.push(story);
            continue;
        }

        if let Some(keyword) = matcher.first_match(&story.title) {
            log::info!("Found match [{}]: {}", keyword, story.title);
            selected.push(story);
        }
    }
    selected
}
