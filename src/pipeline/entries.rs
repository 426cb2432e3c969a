// src/pipeline/entries.rs

//! Packaging of selected stories into feed entries.

use futures::stream::{self, StreamExt};

use crate::models::{MatchedEntry, StoryRecord, fallback_summary, story_discussion_url};
use crate::services::{ItemSource, top_comment_summary};

/// Turn selected stories into feed entries, in order.
///
/// With `enrich` set, each summary is the story's top comment when one can be
/// resolved; otherwise it falls back to a link summary.
pub async fn build_entries(
    source: &dyn ItemSource,
    stories: &[StoryRecord],
    discussion_base: &str,
    enrich: bool,
    concurrency: usize,
) -> Vec<MatchedEntry> {
    let built: Vec<Option<MatchedEntry>> = stream::iter(stories)
        .map(|story| build_entry(source, story, discussion_base, enrich))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    built.into_iter().flatten().collect()
}

async fn build_entry(
    source: &dyn ItemSource,
    story: &StoryRecord,
    discussion_base: &str,
    enrich: bool,
) -> Option<MatchedEntry> {
    let link = match story_discussion_url(discussion_base, story.id) {
        Ok(link) => link,
        Err(e) => {
            log::error!("Cannot build discussion link for story {}: {}", story.id, e);
            return None;
        }
    };

    let comment = if enrich {
        top_comment_summary(source, story).await
    } else {
        None
    };
    let summary = comment.unwrap_or_else(|| fallback_summary(story, &link));

    Some(MatchedEntry::new(story, link, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::StaticSource;

    const BASE: &str = "https://news.ycombinator.com/item";

    fn story(id: u64, url: Option<&str>, kids: &[u64]) -> StoryRecord {
        StoryRecord {
            id,
            title: format!("AI story {id}"),
            url: url.map(str::to_string),
            time: 1_700_000_000,
            kids: kids.to_vec(),
        }
    }

    #[tokio::test]
    async fn test_entries_without_enrichment_use_links() {
        let source = StaticSource::new().with_comment(10, Some("Great read"));
        let stories = vec![
            story(1, Some("https://example.com/1"), &[10]),
            story(2, Some("https://news.ycombinator.com/item?id=2"), &[]),
        ];

        let entries = build_entries(&source, &stories, BASE, false, 4).await;

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].link, "https://news.ycombinator.com/item?id=1");
        assert_eq!(entries[0].summary, "Article: https://example.com/1");
        assert_eq!(
            entries[1].summary,
            "Comments: https://news.ycombinator.com/item?id=2"
        );
        assert_eq!(source.comment_requests(), 0);
    }

    #[tokio::test]
    async fn test_enrichment_replaces_summary() {
        let source = StaticSource::new().with_comment(10, Some("Great read"));
        let stories = vec![story(1, Some("https://example.com/1"), &[10])];

        let entries = build_entries(&source, &stories, BASE, true, 4).await;

        assert_eq!(entries[0].summary, "Great read");
        assert_eq!(entries[0].title, "AI story 1");
        assert_eq!(entries[0].published, 1_700_000_000);
    }

    #[tokio::test]
    async fn test_enrichment_falls_back_to_links() {
        let source = StaticSource::new().with_comment(20, None);
        let stories = vec![
            story(1, Some("https://example.com/1"), &[]),
            story(2, Some("https://example.com/2"), &[20]),
            story(3, Some("https://example.com/3"), &[30]),
        ];

        let entries = build_entries(&source, &stories, BASE, true, 2).await;

        let summaries: Vec<_> = entries.iter().map(|e| e.summary.as_str()).collect();
        assert_eq!(
            summaries,
            vec![
                "Article: https://example.com/1",
                "Article: https://example.com/2",
                "Article: https://example.com/3",
            ]
        );
    }

    #[tokio::test]
    async fn test_entries_keep_story_order() {
        let source = StaticSource::new();
        let stories = vec![story(5, None, &[]), story(2, None, &[]), story(9, None, &[])];

        let entries = build_entries(&source, &stories, BASE, true, 3).await;

        let ids: Vec<_> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }
}
